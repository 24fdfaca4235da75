//! Test builders — ergonomic constructors for normalized records, triples,
//! and cars.
//!
//! Designed for readability in assertions, not for production use.

use carlot_core::matcher::MatchedTriple;
use carlot_core::{Car, Inventory, NormalizedBody, NormalizedEngine, NormalizedModel};
use serde_json::{json, Value};

/// Assembly defaults matching the built-in configuration.
pub const TEST_YEAR: i32 = 2020;
pub const TEST_STOCK: i64 = 100;
pub const TEST_IMAGE: &str = "assets/images/car_temp.png";

/// A normalized model with the given id, make, and name.
pub fn model(id: i64, make_name: &str, name: &str) -> NormalizedModel {
    NormalizedModel {
        id: Some(id),
        make_id: Some(1),
        make_name: Some(make_name.to_string()),
        name: Some(name.to_string()),
        raw: json!({"id": id}),
    }
}

/// A normalized model with a custom raw record (for fallback-path tests).
pub fn model_with_raw(id: Option<i64>, raw: Value) -> NormalizedModel {
    NormalizedModel {
        id,
        make_id: None,
        make_name: None,
        name: None,
        raw,
    }
}

/// A normalized body pointing at `model_id`.
pub fn body(id: i64, model_id: Option<i64>, body_type: &str, doors: i64) -> NormalizedBody {
    NormalizedBody {
        id: Some(id),
        model_id,
        body_type: Some(body_type.to_string()),
        door_count: Some(doors),
        raw: json!({"id": id}),
    }
}

/// A normalized engine pointing at `model_id`.
pub fn engine(id: i64, model_id: Option<i64>, engine_type: &str, hp: i64) -> NormalizedEngine {
    NormalizedEngine {
        id: Some(id),
        model_id,
        engine_type: Some(engine_type.to_string()),
        horsepower: Some(hp),
        raw: json!({"id": id}),
    }
}

/// Build a car from a minimal triple with the test assembly defaults.
pub fn test_car(id: i64, make_name: &str, name: &str, horsepower: Option<i64>) -> Car {
    let mut m = model(id, make_name, name);
    m.raw = json!({"id": id});
    let engine = horsepower.map(|hp| NormalizedEngine {
        id: Some(id * 10),
        model_id: Some(id),
        engine_type: Some("I4".to_string()),
        horsepower: Some(hp),
        raw: json!({}),
    });
    let triple = MatchedTriple {
        model: m,
        body: None,
        engine,
    };
    Car::from_triple(&triple, TEST_YEAR, TEST_STOCK, TEST_IMAGE)
}

/// An inventory of plain non-luxury cars with known ids.
pub fn test_inventory(count: i64) -> Inventory {
    let cars = (1..=count)
        .map(|i| test_car(i, "Honda", &format!("Model {i}"), None))
        .collect();
    Inventory::new(cars)
}
