use serde::{Deserialize, Serialize};

use stockcast_core::{PlanningError, PlanningResult};

/// Precomputed inventory parameters for one product.
///
/// Produced by an external pipeline and treated as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductParameters {
    pub avg_weekly_demand: f64,
    pub std_weekly_demand: f64,
    pub unit_price: f64,
    pub lead_time_days: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
}

impl ProductParameters {
    /// Every field must be finite and non-negative.
    pub fn validate(&self) -> PlanningResult<()> {
        let fields = [
            ("avg_weekly_demand", self.avg_weekly_demand),
            ("std_weekly_demand", self.std_weekly_demand),
            ("unit_price", self.unit_price),
            ("lead_time_days", self.lead_time_days),
            ("safety_stock", self.safety_stock),
            ("reorder_point", self.reorder_point),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PlanningError::validation(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn daily_demand(&self) -> f64 {
        self.avg_weekly_demand / 7.0
    }
}
