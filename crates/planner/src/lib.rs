//! `stockcast-planner`
//!
//! **Responsibility:** the single entry point that turns one product's history
//! and parameters into a replenishment plan.
//!
//! - Data access is injected through [`DemandReader`]; nothing is global.
//! - Every call recomputes from its own input snapshot; nothing is cached.
//! - Degraded inputs produce a valid plan plus [`stockcast_core::Notice`]s.

pub mod controls;
pub mod plan;
pub mod reader;

pub use controls::{HORIZON_WEEKS, PlanControls, WEEKS_OF_SUPPLY};
pub use plan::{Planner, ProductOverview, ReplenishmentPlan, build_plan};
pub use reader::{DemandReader, InMemoryDemandStore};
