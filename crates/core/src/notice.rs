//! Degradation notices.
//!
//! Every condition listed here is recovered locally with a fallback value. A
//! plan carrying notices is still valid; callers decide how to surface them.

use serde::{Deserialize, Serialize};

/// A recoverable condition that degraded part of a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// History was empty or too short; `avg_weekly_demand` stood in for the
    /// named observation.
    InsufficientData { substituted: String },

    /// A metric could not be computed from the available data.
    UndefinedMetric { metric: String, reason: String },

    /// Daily demand was zero, so a day-count estimate uses its guard value.
    DivisionGuard { quantity: String },
}

impl Notice {
    pub fn insufficient_data(substituted: impl Into<String>) -> Self {
        Self::InsufficientData {
            substituted: substituted.into(),
        }
    }

    pub fn undefined_metric(metric: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UndefinedMetric {
            metric: metric.into(),
            reason: reason.into(),
        }
    }

    pub fn division_guard(quantity: impl Into<String>) -> Self {
        Self::DivisionGuard {
            quantity: quantity.into(),
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::InsufficientData { substituted } => {
                write!(f, "insufficient history: average weekly demand used as {substituted}")
            }
            Notice::UndefinedMetric { metric, reason } => {
                write!(f, "{metric} not available: {reason}")
            }
            Notice::DivisionGuard { quantity } => {
                write!(f, "{quantity} not estimated: daily demand is zero")
            }
        }
    }
}
