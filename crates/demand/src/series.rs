use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use stockcast_core::{PlanningError, PlanningResult};

/// Returns the Sunday that closes the week containing `date`.
///
/// A Sunday maps to itself.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let days_to_sunday = (7 - date.weekday().num_days_from_sunday()) % 7;
    date + Days::new(u64::from(days_to_sunday))
}

/// Demand observed in one calendar week.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDemand {
    /// Week-ending Sunday.
    pub week: NaiveDate,
    pub quantity: u64,
}

/// Regular weekly demand series for a single product.
///
/// Invariants:
/// - one entry per calendar week, labelled by its week-ending Sunday
/// - strictly increasing, consecutive weeks (no gaps; empty weeks carry 0)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSeries {
    weeks: Vec<WeekDemand>,
}

impl DemandSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from consecutive weekly quantities.
    ///
    /// `first_week` is normalised to its week-ending Sunday.
    pub fn from_quantities(first_week: NaiveDate, quantities: impl IntoIterator<Item = u64>) -> Self {
        let mut week = week_ending(first_week);
        let mut weeks = Vec::new();
        for quantity in quantities {
            weeks.push(WeekDemand { week, quantity });
            week = week + Days::new(7);
        }
        Self { weeks }
    }

    /// Build a series from explicit points, checking the weekly invariants.
    pub fn try_from_weeks(weeks: Vec<WeekDemand>) -> PlanningResult<Self> {
        for w in &weeks {
            if week_ending(w.week) != w.week {
                return Err(PlanningError::validation(format!(
                    "week {} is not a week-ending Sunday",
                    w.week
                )));
            }
        }
        for pair in weeks.windows(2) {
            if pair[1].week - pair[0].week != chrono::TimeDelta::days(7) {
                return Err(PlanningError::validation(format!(
                    "weeks {} and {} are not consecutive",
                    pair[0].week, pair[1].week
                )));
            }
        }
        Ok(Self { weeks })
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn weeks(&self) -> &[WeekDemand] {
        &self.weeks
    }

    /// Quantities as floats, in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.weeks.iter().map(|w| w.quantity as f64).collect()
    }

    pub fn last(&self) -> Option<&WeekDemand> {
        self.weeks.last()
    }

    pub fn last_week(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|w| w.week)
    }

    /// Chronological prefix/suffix split at `index` (clamped to the length).
    pub fn split_at(&self, index: usize) -> (&[WeekDemand], &[WeekDemand]) {
        self.weeks.split_at(index.min(self.weeks.len()))
    }

    pub fn total(&self) -> u64 {
        self.weeks.iter().map(|w| w.quantity).sum()
    }
}
