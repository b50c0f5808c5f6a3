//! Forecast accuracy metrics.
//!
//! A metric that cannot be computed is a distinct value, not a zero or a NaN.

use serde::{Deserialize, Serialize};

/// A percentage metric, or the reason it is not available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricValue {
    Available { percent: f64 },
    NotAvailable { reason: String },
}

impl MetricValue {
    pub fn not_available(reason: impl Into<String>) -> Self {
        Self::NotAvailable {
            reason: reason.into(),
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            MetricValue::Available { percent } => Some(*percent),
            MetricValue::NotAvailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MetricValue::Available { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            MetricValue::Available { .. } => None,
            MetricValue::NotAvailable { reason } => Some(reason),
        }
    }
}

impl core::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MetricValue::Available { percent } => write!(f, "{percent:.1}%"),
            MetricValue::NotAvailable { .. } => f.write_str("not available"),
        }
    }
}

/// Mean absolute percentage error over aligned actual/predicted values.
///
/// Not available when the window is empty, the inputs are misaligned, or any
/// actual is zero.
pub fn mape(actuals: &[f64], predicted: &[f64]) -> MetricValue {
    if actuals.is_empty() {
        return MetricValue::not_available("test period is empty");
    }
    if actuals.len() != predicted.len() {
        return MetricValue::not_available(format!(
            "{} actuals but {} predictions",
            actuals.len(),
            predicted.len()
        ));
    }
    if actuals.iter().any(|a| *a == 0.0) {
        return MetricValue::not_available("a test-period actual is zero");
    }

    let total: f64 = actuals
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs() / a)
        .sum();
    MetricValue::Available {
        percent: total / (actuals.len() as f64) * 100.0,
    }
}

/// Accuracy implied by demand variability: `(1 - std/avg) × 100`.
///
/// Not available when average demand is zero.
pub fn demand_variability_accuracy(avg_weekly_demand: f64, std_weekly_demand: f64) -> MetricValue {
    if avg_weekly_demand == 0.0 {
        return MetricValue::not_available("average weekly demand is zero");
    }
    let cv = std_weekly_demand / avg_weekly_demand;
    MetricValue::Available {
        percent: (1.0 - cv) * 100.0,
    }
}
