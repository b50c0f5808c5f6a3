use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use stockcast_core::{PlanningError, PlanningResult};

/// Allowed forecast horizon, in weeks.
pub const HORIZON_WEEKS: RangeInclusive<u32> = 1..=12;

/// Allowed target weeks of supply.
pub const WEEKS_OF_SUPPLY: RangeInclusive<u32> = 2..=8;

/// User-adjustable inputs of one planning request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanControls {
    pub current_stock: u32,
    pub horizon_weeks: u32,
    pub weeks_of_supply: u32,
}

impl Default for PlanControls {
    fn default() -> Self {
        Self {
            current_stock: 100,
            horizon_weeks: 4,
            weeks_of_supply: 4,
        }
    }
}

impl PlanControls {
    pub fn new(current_stock: u32, horizon_weeks: u32, weeks_of_supply: u32) -> Self {
        Self {
            current_stock,
            horizon_weeks,
            weeks_of_supply,
        }
    }

    pub fn validate(&self) -> PlanningResult<()> {
        if !HORIZON_WEEKS.contains(&self.horizon_weeks) {
            return Err(PlanningError::validation(format!(
                "horizon must be within {}..={} weeks, got {}",
                HORIZON_WEEKS.start(),
                HORIZON_WEEKS.end(),
                self.horizon_weeks
            )));
        }
        if !WEEKS_OF_SUPPLY.contains(&self.weeks_of_supply) {
            return Err(PlanningError::validation(format!(
                "weeks of supply must be within {}..={}, got {}",
                WEEKS_OF_SUPPLY.start(),
                WEEKS_OF_SUPPLY.end(),
                self.weeks_of_supply
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = PlanControls::default();
        assert_eq!(c, PlanControls::new(100, 4, 4));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn horizon_bounds_are_inclusive() {
        assert!(PlanControls::new(0, 1, 4).validate().is_ok());
        assert!(PlanControls::new(0, 12, 4).validate().is_ok());
        assert!(PlanControls::new(0, 0, 4).validate().is_err());
        assert!(PlanControls::new(0, 13, 4).validate().is_err());
    }

    #[test]
    fn weeks_of_supply_bounds_are_inclusive() {
        assert!(PlanControls::new(0, 4, 2).validate().is_ok());
        assert!(PlanControls::new(0, 4, 8).validate().is_ok());
        let err = PlanControls::new(0, 4, 9).validate().unwrap_err();
        assert!(matches!(err, PlanningError::Validation(msg) if msg.contains("weeks of supply")));
    }
}
