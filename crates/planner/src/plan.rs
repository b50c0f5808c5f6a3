use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use stockcast_core::{Notice, PlanningResult, ProductId};
use stockcast_demand::DemandSeries;
use stockcast_forecast::{
    ForecastResult, MetricValue, SmoothingConfig, SmoothingForecaster, demand_variability_accuracy,
};
use stockcast_inventory::{
    Advice, InventoryProjection, OrderRecommendation, OrderUpToPolicy, ProductParameters,
};

use crate::controls::PlanControls;
use crate::reader::DemandReader;

/// Headline product metrics shown next to the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOverview {
    pub unit_price: f64,
    pub avg_weekly_demand: f64,
    /// `(1 - CV) × 100` from the parameter table.
    pub demand_accuracy: MetricValue,
    pub lead_time_days: f64,
}

/// Everything computed for one planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentPlan {
    pub product: ProductId,
    pub controls: PlanControls,
    pub parameters: ProductParameters,
    pub overview: ProductOverview,
    pub forecast: ForecastResult,
    pub projection: InventoryProjection,
    pub recommendation: OrderRecommendation,
    pub advice: Advice,
    /// Recoverable degradations hit while computing, in pipeline order.
    pub notices: Vec<Notice>,
}

/// Run the full pipeline over an input snapshot.
///
/// Inputs are assumed valid (see [`PlanControls::validate`] and
/// [`ProductParameters::validate`]); [`Planner`] checks them before calling.
pub fn build_plan(
    product: ProductId,
    series: &DemandSeries,
    parameters: ProductParameters,
    controls: PlanControls,
    forecaster: &SmoothingForecaster,
    reference_date: NaiveDate,
) -> ReplenishmentPlan {
    let forecast = forecaster.forecast(
        series,
        parameters.avg_weekly_demand,
        controls.horizon_weeks as usize,
        reference_date,
    );

    let projection = InventoryProjection::simulate(
        controls.current_stock,
        &forecast.future_quantities(),
        &parameters,
    );

    let recommendation =
        OrderUpToPolicy::new(controls.weeks_of_supply).recommend(&parameters, controls.current_stock);
    let advice = recommendation.advice(&parameters);

    let demand_accuracy =
        demand_variability_accuracy(parameters.avg_weekly_demand, parameters.std_weekly_demand);

    let mut notices = forecast.notices.clone();
    if let MetricValue::NotAvailable { reason } = &demand_accuracy {
        notices.push(Notice::undefined_metric("demand accuracy", reason.clone()));
    }
    notices.extend(recommendation.notices());

    let overview = ProductOverview {
        unit_price: parameters.unit_price,
        avg_weekly_demand: parameters.avg_weekly_demand,
        demand_accuracy,
        lead_time_days: parameters.lead_time_days,
    };

    ReplenishmentPlan {
        product,
        controls,
        parameters,
        overview,
        forecast,
        projection,
        recommendation,
        advice,
        notices,
    }
}

/// Planning service over an injected read-only data source.
#[derive(Debug, Clone)]
pub struct Planner<R> {
    reader: R,
    forecaster: SmoothingForecaster,
    reference_date: NaiveDate,
}

impl<R: DemandReader> Planner<R> {
    /// Planner with the default smoother.
    ///
    /// `reference_date` dates the forecast of products without order history:
    /// their first future week is the week ending on or after it.
    pub fn new(reader: R, reference_date: NaiveDate) -> Self {
        Self {
            reader,
            forecaster: SmoothingForecaster::default(),
            reference_date,
        }
    }

    pub fn with_config(mut self, config: SmoothingConfig) -> Self {
        self.forecaster = SmoothingForecaster::new(config);
        self
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// `compute(product, stock, horizon, weeks_of_supply)`.
    pub fn compute(
        &self,
        product: &ProductId,
        current_stock: u32,
        horizon_weeks: u32,
        weeks_of_supply: u32,
    ) -> PlanningResult<ReplenishmentPlan> {
        self.plan(
            product,
            PlanControls::new(current_stock, horizon_weeks, weeks_of_supply),
        )
    }

    pub fn plan(&self, product: &ProductId, controls: PlanControls) -> PlanningResult<ReplenishmentPlan> {
        let span = info_span!("plan", product = %product);
        let _guard = span.enter();

        controls.validate()?;
        let parameters = self.reader.parameters(product)?;
        parameters.validate()?;
        let series = self.reader.demand_series(product)?;

        let plan = build_plan(
            product.clone(),
            &series,
            parameters,
            controls,
            &self.forecaster,
            self.reference_date,
        );

        for notice in &plan.notices {
            warn!(notice = %notice, "plan degraded");
        }
        info!(
            weeks = series.len(),
            stock = controls.current_stock,
            horizon = controls.horizon_weeks,
            status = %plan.recommendation.status,
            order_qty = plan.recommendation.order_qty,
            "plan computed"
        );

        Ok(plan)
    }
}
