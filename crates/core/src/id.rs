//! Product identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::PlanningError;

/// Identifier of a product.
///
/// Products are keyed by their catalogue name in the upstream dataset, so the
/// identifier is a trimmed, non-empty string rather than a generated id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlanningError::validation("product id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
