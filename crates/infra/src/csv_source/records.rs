//! Row layouts of the dataset CSV files.
//!
//! Column names follow the upstream dataset; unknown columns are ignored.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use stockcast_inventory::ProductParameters;

/// One line of the order history file.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRow {
    #[serde(rename = "Product Name")]
    pub product: String,
    #[serde(rename = "order date (DateOrders)", deserialize_with = "deserialize_order_date")]
    pub ordered_at: NaiveDateTime,
    #[serde(rename = "Order Item Quantity")]
    pub quantity: u64,
}

/// One line of the inventory parameter file.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterRow {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Avg_Weekly_Demand")]
    pub avg_weekly_demand: f64,
    #[serde(rename = "Std_Weekly_Demand")]
    pub std_weekly_demand: f64,
    #[serde(rename = "Unit_Price")]
    pub unit_price: f64,
    #[serde(rename = "Lead_Time_Days")]
    pub lead_time_days: f64,
    #[serde(rename = "Safety_Stock")]
    pub safety_stock: f64,
    #[serde(rename = "Reorder_Point")]
    pub reorder_point: f64,
}

impl ParameterRow {
    pub fn to_parameters(&self) -> ProductParameters {
        ProductParameters {
            avg_weekly_demand: self.avg_weekly_demand,
            std_weekly_demand: self.std_weekly_demand,
            unit_price: self.unit_price,
            lead_time_days: self.lead_time_days,
            safety_stock: self.safety_stock,
            reorder_point: self.reorder_point,
        }
    }
}

const DATETIME_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Parse the order timestamp formats seen in exports of the dataset.
pub fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn deserialize_order_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_order_date(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised order date: {s:?}")))
}
