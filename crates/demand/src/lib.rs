//! Demand history module.
//!
//! Turns raw per-order records into the regular weekly series the forecaster
//! consumes. Deterministic, no IO.

pub mod aggregate;
pub mod order;
pub mod series;

pub use aggregate::{aggregate_for, aggregate_weekly};
pub use order::OrderRecord;
pub use series::{DemandSeries, WeekDemand, week_ending};
