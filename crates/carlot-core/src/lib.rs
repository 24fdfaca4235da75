//! carlot-core — inventory synthesis core.
//!
//! This crate holds the pure data logic that turns three heterogeneous
//! car-data API responses (models, bodies, engines) into a unified
//! [`Inventory`] of [`Car`] values.
//!
//! # Pipeline
//!
//! ```text
//! raw responses ──► extract ──► normalize ──► match ──► Car / Inventory
//! ```
//!
//! Everything here is synchronous and side-effect free; fetching and
//! persistence live in `carlot-sources` and the pipeline orchestration in
//! the `carlot` binary crate.

pub mod car;
pub mod config;
pub mod extract;
pub mod inventory;
pub mod matcher;
pub mod normalize;
pub mod types;

pub use car::Car;
pub use inventory::{Inventory, PriceRange, ReportEntry};
pub use matcher::MatchedTriple;
pub use types::{CarStatus, NormalizedBody, NormalizedEngine, NormalizedModel};
