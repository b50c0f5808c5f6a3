//! Order-up-to replenishment policy.
//!
//! - **Target**: `avg_weekly_demand × weeks_of_supply + safety_stock`
//! - **Order**: `max(0, round(target - current_stock))` units
//! - **Status**: Critical if at/below safety stock, else ReorderPoint if
//!   at/below the reorder point, else Healthy (first match wins)

use serde::{Deserialize, Serialize};

use stockcast_core::Notice;

use crate::money::format_money;
use crate::parameters::ProductParameters;

/// Day count shown when there is no demand to deplete the stock.
pub const NO_DEMAND_SENTINEL_DAYS: f64 = 999.0;

/// Stock position relative to the policy thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Critical,
    ReorderPoint,
    Healthy,
}

impl StockStatus {
    pub fn classify(current_stock: f64, safety_stock: f64, reorder_point: f64) -> Self {
        if current_stock <= safety_stock {
            StockStatus::Critical
        } else if current_stock <= reorder_point {
            StockStatus::ReorderPoint
        } else {
            StockStatus::Healthy
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            StockStatus::Critical => "critical",
            StockStatus::ReorderPoint => "reorder point reached",
            StockStatus::Healthy => "healthy",
        };
        f.write_str(s)
    }
}

/// Days until an inventory event, or a guard when daily demand is zero.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum DayEstimate {
    Days(f64),
    NoDemand,
}

impl DayEstimate {
    /// Numeric value, with [`NO_DEMAND_SENTINEL_DAYS`] standing in for the guard.
    pub fn as_days(&self) -> f64 {
        match self {
            DayEstimate::Days(d) => *d,
            DayEstimate::NoDemand => NO_DEMAND_SENTINEL_DAYS,
        }
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, DayEstimate::NoDemand)
    }
}

/// Narrative advice for a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub headline: String,
    pub lines: Vec<String>,
}

/// Result of applying the policy to a stock position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecommendation {
    pub current_stock: u32,
    pub weeks_of_supply: u32,
    pub target_stock: f64,
    pub order_qty: u64,
    pub order_cost: f64,
    pub status: StockStatus,
    pub daily_demand: f64,
    pub days_until_stockout: DayEstimate,
    pub days_until_reorder: f64,
}

impl OrderRecommendation {
    pub fn notices(&self) -> Vec<Notice> {
        if self.days_until_stockout.is_guarded() {
            vec![Notice::division_guard("days until stockout")]
        } else {
            Vec::new()
        }
    }

    pub fn advice(&self, params: &ProductParameters) -> Advice {
        let stock = self.current_stock;
        let qty = self.order_qty;
        let cost = self.order_cost;
        match self.status {
            StockStatus::Critical => Advice {
                headline: "CRITICAL: stock below safety level".to_string(),
                lines: vec![
                    format!(
                        "Current stock ({stock} units) is at or below safety stock ({:.0} units).",
                        params.safety_stock
                    ),
                    format!("Place an urgent order of {qty} units immediately."),
                    format!("Estimated order cost: {}", format_money(cost)),
                ],
            },
            StockStatus::ReorderPoint => Advice {
                headline: "Reorder point reached".to_string(),
                lines: vec![
                    format!(
                        "Current stock ({stock} units) has reached the reorder point ({:.0} units).",
                        params.reorder_point
                    ),
                    format!(
                        "Order {qty} units now ({}-week supply).",
                        self.weeks_of_supply
                    ),
                    format!("Estimated order cost: {}", format_money(cost)),
                    format!(
                        "With {:.1} days lead time, stock arrives before depletion.",
                        params.lead_time_days
                    ),
                ],
            },
            StockStatus::Healthy => Advice {
                headline: "Stock level healthy".to_string(),
                lines: vec![
                    format!(
                        "Current stock ({stock} units) is above the reorder point ({:.0} units).",
                        params.reorder_point
                    ),
                    format!(
                        "Next reorder in approximately {:.1} days.",
                        self.days_until_reorder
                    ),
                    format!("When you reorder: {qty} units ({}).", format_money(cost)),
                    "Continue monitoring; no immediate action required.".to_string(),
                ],
            },
        }
    }
}

/// Periodic-review order-up-to policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrderUpToPolicy {
    weeks_of_supply: u32,
}

impl OrderUpToPolicy {
    pub fn new(weeks_of_supply: u32) -> Self {
        Self { weeks_of_supply }
    }

    pub fn weeks_of_supply(&self) -> u32 {
        self.weeks_of_supply
    }

    pub fn target_stock(&self, params: &ProductParameters) -> f64 {
        params.avg_weekly_demand * f64::from(self.weeks_of_supply) + params.safety_stock
    }

    pub fn order_quantity(&self, params: &ProductParameters, current_stock: u32) -> u64 {
        let gap = (self.target_stock(params) - f64::from(current_stock)).round();
        if gap > 0.0 { gap as u64 } else { 0 }
    }

    pub fn recommend(&self, params: &ProductParameters, current_stock: u32) -> OrderRecommendation {
        let stock = f64::from(current_stock);
        let order_qty = self.order_quantity(params, current_stock);
        let daily_demand = params.daily_demand();

        let days_until_stockout = if daily_demand > 0.0 {
            DayEstimate::Days(stock / daily_demand)
        } else {
            DayEstimate::NoDemand
        };

        let above_reorder = stock - params.reorder_point;
        let days_until_reorder = if daily_demand > 0.0 && above_reorder > 0.0 {
            above_reorder / daily_demand
        } else {
            0.0
        };

        OrderRecommendation {
            current_stock,
            weeks_of_supply: self.weeks_of_supply,
            target_stock: self.target_stock(params),
            order_qty,
            order_cost: order_qty as f64 * params.unit_price,
            status: StockStatus::classify(stock, params.safety_stock, params.reorder_point),
            daily_demand,
            days_until_stockout,
            days_until_reorder,
        }
    }
}
