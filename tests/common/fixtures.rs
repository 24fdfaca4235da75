//! Static record fixtures used across harnesses.
//!
//! The canonical end-to-end fixture is three models, two bodies (one
//! matching model #1 by id, one orphaned), and one engine (matching model
//! #2 through the three-level nested `make_model_trim.make_model.id`
//! path), so an assembled inventory is exactly:
//!
//! - model #1: body, no engine
//! - model #2: engine, no body
//! - model #3: neither
//!
//! Each record set is also offered pre-wrapped in a different response
//! envelope so the end-to-end path exercises the extractor's shapes.

use serde_json::{json, Value};

/// Three raw model records, ids 1..=3.
pub fn fixture_models() -> Vec<Value> {
    vec![
        json!({"id": 1, "make_id": 5, "make": {"id": 5, "name": "Honda"}, "name": "Civic"}),
        json!({"id": 2, "make": {"id": 9, "name": "BMW"}, "name": "3 Series"}),
        json!({"id": 3, "make_name": "Toyota", "model_name": "Corolla"}),
    ]
}

/// Two raw body records: one for model #1, one orphaned.
pub fn fixture_bodies() -> Vec<Value> {
    vec![
        json!({"id": 100, "make_model_id": 1, "type": "Sedan", "doors": 4}),
        json!({"id": 101, "make_model_id": 999, "type": "Coupe", "doors": 2}),
    ]
}

/// One raw engine record pointing at model #2 through the deepest nested
/// model-id path.
pub fn fixture_engines() -> Vec<Value> {
    vec![json!({
        "id": 300,
        "make_model_trim": {"make_model": {"id": 2}},
        "engine": "V6",
        "horsepower": 280
    })]
}

/// The models set wrapped in the `collection.data` envelope.
pub fn fixture_models_response() -> Value {
    json!({"collection": {"data": fixture_models()}})
}

/// The bodies set wrapped in the `data` envelope.
pub fn fixture_bodies_response() -> Value {
    json!({"data": fixture_bodies()})
}

/// The engines set as a bare array.
pub fn fixture_engines_response() -> Value {
    Value::Array(fixture_engines())
}
