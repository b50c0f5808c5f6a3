//! CSV-backed dataset.
//!
//! Both files are read once at construction and aggregated into an immutable
//! in-memory store; lookups afterwards never touch the filesystem.

mod records;

pub use records::{OrderRow, ParameterRow, parse_order_date};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use stockcast_core::{PlanningResult, ProductId};
use stockcast_demand::{DemandSeries, OrderRecord};
use stockcast_inventory::ProductParameters;
use stockcast_planner::{DemandReader, InMemoryDemandStore};

use crate::error::LoadError;

const ORDERS_FILE: &str = "orders";
const PARAMETERS_FILE: &str = "parameters";

/// Read-only dataset loaded from the order history and parameter CSV files.
#[derive(Debug, Clone)]
pub struct CsvDemandSource {
    store: InMemoryDemandStore,
}

impl CsvDemandSource {
    pub fn open(orders: impl AsRef<Path>, parameters: impl AsRef<Path>) -> Result<Self, LoadError> {
        let orders_file = open_file(orders.as_ref())?;
        let parameters_file = open_file(parameters.as_ref())?;
        Self::from_readers(orders_file, parameters_file)
    }

    pub fn from_readers<O: Read, P: Read>(orders: O, parameters: P) -> Result<Self, LoadError> {
        let parameter_rows: Vec<ParameterRow> = read_rows(PARAMETERS_FILE, parameters)?;
        let order_rows: Vec<OrderRow> = read_rows(ORDERS_FILE, orders)?;

        let mut table: BTreeMap<ProductId, ProductParameters> = BTreeMap::new();
        for row in &parameter_rows {
            let id = parse_product(PARAMETERS_FILE, &row.product)?;
            let params = row.to_parameters();
            params.validate().map_err(|e| LoadError::Invalid {
                file: PARAMETERS_FILE,
                message: format!("{id}: {e}"),
            })?;
            if table.contains_key(&id) {
                warn!(product = %id, "duplicate parameter row ignored");
                continue;
            }
            table.insert(id, params);
        }

        let records = order_rows
            .iter()
            .map(|row| {
                Ok(OrderRecord::new(
                    parse_product(ORDERS_FILE, &row.product)?,
                    row.ordered_at,
                    row.quantity,
                ))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let store = InMemoryDemandStore::from_orders(table, &records);
        info!(
            products = store.len(),
            orders = records.len(),
            "demand dataset loaded"
        );
        Ok(Self { store })
    }
}

impl DemandReader for CsvDemandSource {
    fn demand_series(&self, product: &ProductId) -> PlanningResult<DemandSeries> {
        self.store.demand_series(product)
    }

    fn parameters(&self, product: &ProductId) -> PlanningResult<ProductParameters> {
        self.store.parameters(product)
    }

    fn products(&self) -> Vec<ProductId> {
        self.store.products()
    }
}

fn open_file(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<T: DeserializeOwned, R: Read>(file: &'static str, reader: R) -> Result<Vec<T>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: T = result.map_err(|source| LoadError::Parse {
            file,
            line: index as u64 + 2,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_product(file: &'static str, raw: &str) -> Result<ProductId, LoadError> {
    raw.parse().map_err(|e| LoadError::Invalid {
        file,
        message: format!("{e}"),
    })
}
