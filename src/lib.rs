//! carlot — car dealership inventory tooling.
//!
//! Synthesizes a dealership inventory from three heterogeneous car-data API
//! record sets and, on demand, bulk-imports the result into a document
//! store.
//!
//! # Architecture
//!
//! ```text
//! CarDataSource ──► extract ──► normalize ──► match ──► Inventory
//!                                                         │
//!                                              bulk import └──► DocumentStore
//! ```
//!
//! The pure data logic lives in `carlot-core`, the network/storage adapters
//! in `carlot-sources`; this crate orchestrates them and fronts the CLI.

pub mod import;
pub mod pipeline;

pub use import::{car_document, import_inventory, ImportSummary};
pub use pipeline::{build_inventory, AssemblyError};
