use std::collections::BTreeMap;
use std::sync::Arc;

use stockcast_core::{PlanningError, PlanningResult, ProductId};
use stockcast_demand::{DemandSeries, OrderRecord, aggregate_for};
use stockcast_inventory::ProductParameters;

/// Read-only access to the historical dataset.
///
/// Implementations load their data once and never mutate it afterwards, so a
/// single reader can be shared across callers.
pub trait DemandReader: Send + Sync {
    /// Weekly demand for `product`. A known product without orders yields an
    /// empty series.
    fn demand_series(&self, product: &ProductId) -> PlanningResult<DemandSeries>;

    /// Precomputed parameters for `product`.
    fn parameters(&self, product: &ProductId) -> PlanningResult<ProductParameters>;

    /// All products with parameters, in a stable order.
    fn products(&self) -> Vec<ProductId>;
}

impl<R: DemandReader + ?Sized> DemandReader for Arc<R> {
    fn demand_series(&self, product: &ProductId) -> PlanningResult<DemandSeries> {
        (**self).demand_series(product)
    }

    fn parameters(&self, product: &ProductId) -> PlanningResult<ProductParameters> {
        (**self).parameters(product)
    }

    fn products(&self) -> Vec<ProductId> {
        (**self).products()
    }
}

impl<R: DemandReader + ?Sized> DemandReader for &R {
    fn demand_series(&self, product: &ProductId) -> PlanningResult<DemandSeries> {
        (**self).demand_series(product)
    }

    fn parameters(&self, product: &ProductId) -> PlanningResult<ProductParameters> {
        (**self).parameters(product)
    }

    fn products(&self) -> Vec<ProductId> {
        (**self).products()
    }
}

/// In-memory reader for tests/dev and for hosts that load data themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDemandStore {
    parameters: BTreeMap<ProductId, ProductParameters>,
    series: BTreeMap<ProductId, DemandSeries>,
}

impl InMemoryDemandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parameter table and raw order records.
    ///
    /// Series are aggregated once here. Orders for products without
    /// parameters are ignored.
    pub fn from_orders(
        parameters: impl IntoIterator<Item = (ProductId, ProductParameters)>,
        orders: &[OrderRecord],
    ) -> Self {
        let parameters: BTreeMap<_, _> = parameters.into_iter().collect();
        let series = parameters
            .keys()
            .map(|id| (id.clone(), aggregate_for(id, orders)))
            .filter(|(_, s)| !s.is_empty())
            .collect();
        Self { parameters, series }
    }

    pub fn with_product(
        mut self,
        product: ProductId,
        parameters: ProductParameters,
        series: DemandSeries,
    ) -> Self {
        self.series.insert(product.clone(), series);
        self.parameters.insert(product, parameters);
        self
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl DemandReader for InMemoryDemandStore {
    fn demand_series(&self, product: &ProductId) -> PlanningResult<DemandSeries> {
        if !self.parameters.contains_key(product) {
            return Err(PlanningError::not_found(product));
        }
        Ok(self.series.get(product).cloned().unwrap_or_default())
    }

    fn parameters(&self, product: &ProductId) -> PlanningResult<ProductParameters> {
        self.parameters
            .get(product)
            .cloned()
            .ok_or_else(|| PlanningError::not_found(product))
    }

    fn products(&self) -> Vec<ProductId> {
        self.parameters.keys().cloned().collect()
    }
}
