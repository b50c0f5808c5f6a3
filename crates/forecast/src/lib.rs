//! `stockcast-forecast`
//!
//! Single exponential smoothing over a chronological train/test split, plus
//! the accuracy metrics reported next to the forecast.
//!
//! Everything here is a pure function of its inputs: no IO, no shared state.

pub mod accuracy;
pub mod config;
pub mod smoothing;
pub mod split;

pub use accuracy::{MetricValue, demand_variability_accuracy, mape};
pub use config::{DEFAULT_ALPHA, DEFAULT_TRAIN_RATIO, SmoothingConfig};
pub use smoothing::{
    ForecastPoint, ForecastResult, SmoothingForecaster, future_weeks, project_future,
    smooth_test_window,
};
pub use split::{TrainTestSplit, train_len};
