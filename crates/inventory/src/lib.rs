//! Inventory module.
//!
//! Forward stock projection and the order-up-to replenishment policy,
//! implemented purely as deterministic logic (no IO, no storage).

pub mod money;
pub mod parameters;
pub mod policy;
pub mod projection;

pub use money::format_money;
pub use parameters::ProductParameters;
pub use policy::{
    Advice, DayEstimate, NO_DEMAND_SENTINEL_DAYS, OrderRecommendation, OrderUpToPolicy,
    StockStatus,
};
pub use projection::InventoryProjection;
