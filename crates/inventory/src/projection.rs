use serde::{Deserialize, Serialize};

use crate::parameters::ProductParameters;

/// Week-by-week on-hand inventory under forecast demand.
///
/// `levels[0]` is the starting stock; each later level is the previous one
/// minus that week's forecast, clamped at zero. Unmet demand is dropped, not
/// backordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryProjection {
    pub levels: Vec<f64>,
    pub safety_stock: f64,
    pub reorder_point: f64,
}

impl InventoryProjection {
    pub fn simulate(current_stock: u32, forecast: &[f64], params: &ProductParameters) -> Self {
        let mut levels = Vec::with_capacity(forecast.len() + 1);
        levels.push(f64::from(current_stock));
        for demand in forecast {
            let prev = levels[levels.len() - 1];
            levels.push((prev - demand).max(0.0));
        }
        Self {
            levels,
            safety_stock: params.safety_stock,
            reorder_point: params.reorder_point,
        }
    }

    /// `Week 0` .. `Week H`, one per level.
    pub fn week_labels(&self) -> Vec<String> {
        (0..self.levels.len()).map(|i| format!("Week {i}")).collect()
    }

    /// First week whose level is at or below `threshold`.
    pub fn first_week_at_or_below(&self, threshold: f64) -> Option<usize> {
        self.levels.iter().position(|l| *l <= threshold)
    }

    /// First week the projection hits zero stock.
    pub fn stockout_week(&self) -> Option<usize> {
        self.first_week_at_or_below(0.0)
    }

    pub fn ending_level(&self) -> f64 {
        self.levels.last().copied().unwrap_or(0.0)
    }
}
