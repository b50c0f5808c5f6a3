use serde::{Deserialize, Serialize};

use stockcast_core::{PlanningError, PlanningResult};

/// Default smoothing constant.
pub const DEFAULT_ALPHA: f64 = 0.6;

/// Share of the history used for training.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Smoother configuration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    alpha: f64,
    train_ratio: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            train_ratio: DEFAULT_TRAIN_RATIO,
        }
    }
}

impl SmoothingConfig {
    /// `alpha` must lie strictly inside (0, 1).
    pub fn new(alpha: f64) -> PlanningResult<Self> {
        if !(alpha.is_finite() && alpha > 0.0 && alpha < 1.0) {
            return Err(PlanningError::validation(format!(
                "alpha must be within (0, 1), got {alpha}"
            )));
        }
        Ok(Self {
            alpha,
            ..Self::default()
        })
    }

    /// `ratio` must lie within [0, 1].
    pub fn with_train_ratio(mut self, ratio: f64) -> PlanningResult<Self> {
        if !(ratio.is_finite() && (0.0..=1.0).contains(&ratio)) {
            return Err(PlanningError::validation(format!(
                "train ratio must be within [0, 1], got {ratio}"
            )));
        }
        self.train_ratio = ratio;
        Ok(self)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn train_ratio(&self) -> f64 {
        self.train_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_alpha_point_six_and_eighty_percent_train() {
        let cfg = SmoothingConfig::default();
        assert_eq!(cfg.alpha(), 0.6);
        assert_eq!(cfg.train_ratio(), 0.8);
    }

    #[test]
    fn rejects_alpha_outside_open_unit_interval() {
        for alpha in [0.0, 1.0, -0.2, 1.5, f64::NAN, f64::INFINITY] {
            assert!(SmoothingConfig::new(alpha).is_err(), "alpha {alpha} accepted");
        }
        assert!(SmoothingConfig::new(0.3).is_ok());
    }

    #[test]
    fn rejects_train_ratio_outside_unit_interval() {
        let cfg = SmoothingConfig::default();
        assert!(cfg.with_train_ratio(1.2).is_err());
        assert!(cfg.with_train_ratio(-0.1).is_err());
        assert_eq!(cfg.with_train_ratio(0.5).unwrap().train_ratio(), 0.5);
    }
}
