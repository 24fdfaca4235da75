//! Field normalizer — maps raw model/body/engine records into the canonical
//! [`Normalized*`](crate::types) shapes.
//!
//! Each field is resolved through an ordered fallback chain of JSON-pointer
//! paths; the first path holding a value of the right type wins. A miss is
//! never an error, it resolves to `None`. All three functions are pure:
//! identical input always yields identical output.

use serde_json::Value;

use crate::types::{NormalizedBody, NormalizedEngine, NormalizedModel};

// ---------------------------------------------------------------------------
// Fallback chains (JSON-pointer paths, in priority order)
// ---------------------------------------------------------------------------

const MODEL_MAKE_ID: &[&str] = &["/make_id", "/make/id"];
const MODEL_MAKE_NAME: &[&str] = &["/make/name", "/make_name"];
const MODEL_NAME: &[&str] = &["/name", "/model_name", "/title"];

/// Bodies and engines point back at their model through a denormalized trim
/// record, which the API nests up to three levels deep.
const MODEL_ID: &[&str] = &[
    "/make_model_trim/make_model/id",
    "/make_model_trim/make_model_id",
    "/make_model_id",
];

const BODY_TYPE: &[&str] = &["/type", "/value", "/name"];
const DOOR_COUNT: &[&str] = &["/doors"];

const ENGINE_TYPE: &[&str] = &["/engine", "/engine_type", "/name", "/value"];
const HORSEPOWER: &[&str] = &["/horsepower", "/horsepower_hp", "/hp"];

// ---------------------------------------------------------------------------
// Normalizers
// ---------------------------------------------------------------------------

/// Normalize one raw model record.
pub fn normalize_model(raw: Value) -> NormalizedModel {
    NormalizedModel {
        id: first_i64(&raw, &["/id"]),
        make_id: first_i64(&raw, MODEL_MAKE_ID),
        make_name: first_str(&raw, MODEL_MAKE_NAME),
        name: first_str(&raw, MODEL_NAME),
        raw,
    }
}

/// Normalize one raw body record.
pub fn normalize_body(raw: Value) -> NormalizedBody {
    NormalizedBody {
        id: first_i64(&raw, &["/id"]),
        model_id: first_i64(&raw, MODEL_ID),
        body_type: first_str(&raw, BODY_TYPE),
        door_count: first_i64(&raw, DOOR_COUNT),
        raw,
    }
}

/// Normalize one raw engine record.
pub fn normalize_engine(raw: Value) -> NormalizedEngine {
    NormalizedEngine {
        id: first_i64(&raw, &["/id"]),
        model_id: first_i64(&raw, MODEL_ID),
        engine_type: first_str(&raw, ENGINE_TYPE),
        horsepower: first_i64(&raw, HORSEPOWER),
        raw,
    }
}

// ---------------------------------------------------------------------------
// Pointer-chain lookups (shared with the matcher's fallback path)
// ---------------------------------------------------------------------------

/// First path in `paths` that resolves to an integer.
pub(crate) fn first_i64(raw: &Value, paths: &[&str]) -> Option<i64> {
    paths
        .iter()
        .find_map(|p| raw.pointer(p).and_then(Value::as_i64))
}

/// First path in `paths` that resolves to a string.
pub(crate) fn first_str(raw: &Value, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .find_map(|p| raw.pointer(p).and_then(Value::as_str).map(str::to_owned))
}
