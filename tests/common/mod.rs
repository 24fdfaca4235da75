//! Shared test utilities for carlot integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod fake_car_api;
pub mod fixtures;

pub use builders::*;
pub use fake_car_api::*;
pub use fixtures::*;
