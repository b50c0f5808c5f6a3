//! Shared building blocks for the planning crates.
//!
//! This crate contains **pure** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod notice;

pub use error::{PlanningError, PlanningResult};
pub use id::ProductId;
pub use notice::Notice;
