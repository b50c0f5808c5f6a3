use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stockcast_core::Notice;
use stockcast_demand::{DemandSeries, WeekDemand, week_ending};

use crate::accuracy::{MetricValue, mape};
use crate::config::SmoothingConfig;
use crate::split::TrainTestSplit;

/// One-step-ahead predictions over the test window.
///
/// `prediction[0] = seed`; afterwards each prediction blends the previous
/// week's *observed* value with the previous prediction. This needs ground
/// truth for the whole window and is not a recipe for unknown future weeks.
pub fn smooth_test_window(seed: f64, actuals: &[f64], alpha: f64) -> Vec<f64> {
    let mut predictions = Vec::with_capacity(actuals.len());
    let mut last_forecast = seed;
    for i in 0..actuals.len() {
        let pred = if i == 0 {
            last_forecast
        } else {
            alpha * actuals[i - 1] + (1.0 - alpha) * last_forecast
        };
        predictions.push(pred);
        last_forecast = pred;
    }
    predictions
}

/// Out-of-sample forecast that decays geometrically from `seed` toward `mean`.
pub fn project_future(seed: f64, mean: f64, alpha: f64, horizon: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(horizon);
    let mut last_val = seed;
    for _ in 0..horizon {
        let pred = alpha * last_val + (1.0 - alpha) * mean;
        out.push(pred);
        last_val = pred;
    }
    out
}

/// `horizon` consecutive week-ending dates strictly after `anchor`.
pub fn future_weeks(anchor: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as u64)
        .map(|i| anchor + Days::new(7 * i))
        .collect()
}

/// A single future forecast value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// 1-based position within the horizon.
    pub week_number: usize,
    pub date: NaiveDate,
    pub quantity: f64,
}

impl ForecastPoint {
    pub fn label(&self) -> String {
        format!("Week {}", self.week_number)
    }
}

/// Output of the smoothing forecaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub train: Vec<WeekDemand>,
    pub test: Vec<WeekDemand>,
    /// Aligned 1:1 with `test`.
    pub test_predictions: Vec<f64>,
    pub future_forecast: Vec<ForecastPoint>,
    pub mape: MetricValue,
    /// Not serialized; callers fold these into their own notice list.
    #[serde(skip)]
    pub notices: Vec<Notice>,
}

impl ForecastResult {
    pub fn future_quantities(&self) -> Vec<f64> {
        self.future_forecast.iter().map(|p| p.quantity).collect()
    }

    /// The last `n` training weeks.
    pub fn recent_train(&self, n: usize) -> &[WeekDemand] {
        &self.train[self.train.len().saturating_sub(n)..]
    }
}

/// Single exponential smoothing forecaster.
#[derive(Debug, Copy, Clone, Default)]
pub struct SmoothingForecaster {
    config: SmoothingConfig,
}

impl SmoothingForecaster {
    pub fn new(config: SmoothingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Fit on the train/test split and forecast `horizon` weeks ahead.
    ///
    /// Empty history falls back to `avg_weekly_demand` for both seeds; future
    /// dates then start at the week ending on or after `reference_date`.
    pub fn forecast(
        &self,
        series: &DemandSeries,
        avg_weekly_demand: f64,
        horizon: usize,
        reference_date: NaiveDate,
    ) -> ForecastResult {
        let alpha = self.config.alpha();
        let split = TrainTestSplit::new(series, self.config.train_ratio());
        let mut notices = Vec::new();

        let test_seed = split.last_train().unwrap_or_else(|| {
            if !split.test.is_empty() {
                notices.push(Notice::insufficient_data("test-period seed"));
            }
            avg_weekly_demand
        });
        let actuals = split.test_actuals();
        let test_predictions = smooth_test_window(test_seed, &actuals, alpha);

        let mape = mape(&actuals, &test_predictions);
        if let MetricValue::NotAvailable { reason } = &mape {
            notices.push(Notice::undefined_metric("mape", reason.clone()));
        }

        let future_seed = match series.last() {
            Some(w) => w.quantity as f64,
            None => {
                notices.push(Notice::insufficient_data("future-forecast seed"));
                avg_weekly_demand
            }
        };
        let anchor = series
            .last_week()
            .unwrap_or_else(|| week_ending(reference_date) - Days::new(7));
        let future_forecast = project_future(future_seed, avg_weekly_demand, alpha, horizon)
            .into_iter()
            .zip(future_weeks(anchor, horizon))
            .enumerate()
            .map(|(i, (quantity, date))| ForecastPoint {
                week_number: i + 1,
                date,
                quantity,
            })
            .collect();

        debug!(
            weeks = series.len(),
            train = split.train.len(),
            test = split.test.len(),
            horizon,
            alpha,
            "smoothing forecast computed"
        );

        ForecastResult {
            train: split.train.to_vec(),
            test: split.test.to_vec(),
            test_predictions,
            future_forecast,
            mape,
            notices,
        }
    }
}
