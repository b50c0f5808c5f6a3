//! Planning error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the planning crates.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Hard failure while producing a plan.
///
/// Recoverable conditions (missing history, undefined metrics, zero demand)
/// are never raised here; they degrade the result and are reported as
/// [`crate::Notice`] values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// A value failed validation (control out of range, negative parameter).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The data source knows nothing about the requested product.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The data source could not be read or parsed.
    #[error("data source error: {0}")]
    DataSource(String),
}

impl PlanningError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(product: &ProductId) -> Self {
        Self::ProductNotFound(product.clone())
    }

    pub fn data_source(msg: impl Into<String>) -> Self {
        Self::DataSource(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = PlanningError::validation("horizon must be within 1..=12");
        assert_eq!(
            err.to_string(),
            "validation failed: horizon must be within 1..=12"
        );

        let product: ProductId = "Field & Stream Sportsman 16 Gun Fire Safe".parse().unwrap();
        let err = PlanningError::not_found(&product);
        assert_eq!(
            err.to_string(),
            "product not found: Field & Stream Sportsman 16 Gun Fire Safe"
        );
    }
}
