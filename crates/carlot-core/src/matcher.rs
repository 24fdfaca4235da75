//! Cross-entity matcher — associates each model with zero-or-one body and
//! zero-or-one engine.
//!
//! The primary join is id equality on `model_id`. The upstream API does not
//! guarantee coverage, so when no body or engine points at a model the
//! matcher falls back to heuristic lookups inside the model's own raw
//! record, where some plan tiers embed denormalized body/engine data. An
//! unmatched slot is `None`: a valid, expected outcome, never an error.

use serde_json::{json, Value};

use crate::normalize::{first_i64, first_str};
use crate::types::{NormalizedBody, NormalizedEngine, NormalizedModel};

/// One model paired with its best-effort body and engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedTriple {
    pub model: NormalizedModel,
    pub body: Option<NormalizedBody>,
    pub engine: Option<NormalizedEngine>,
}

// ---------------------------------------------------------------------------
// Fallback candidate paths (in priority order)
// ---------------------------------------------------------------------------

const BODY_CANDIDATES: &[&str] = &[
    "/make_model_trim/make_model",
    "/make_model",
    "/bodies",
    "/body",
    "/attributes/body",
];

const ENGINE_CANDIDATES: &[&str] = &[
    "/make_model_trim/make_model",
    "/make_model",
    "/engines",
    "/engine",
    "/attributes/engine",
];

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Match every model against the body and engine lists, in model order.
///
/// When several bodies (or engines) share a `model_id`, the first one in
/// input order wins and later duplicates are ignored; output order and
/// tie-breaking are stable for a given input.
pub fn match_records(
    models: Vec<NormalizedModel>,
    bodies: &[NormalizedBody],
    engines: &[NormalizedEngine],
) -> Vec<MatchedTriple> {
    models
        .into_iter()
        .map(|model| {
            let body = bodies
                .iter()
                .find(|b| b.model_id.is_some() && b.model_id == model.id)
                .cloned()
                .or_else(|| body_from_raw(&model.raw));
            let engine = engines
                .iter()
                .find(|e| e.model_id.is_some() && e.model_id == model.id)
                .cloned()
                .or_else(|| engine_from_raw(&model.raw));
            MatchedTriple { model, body, engine }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Heuristic fallback over the model's raw record
// ---------------------------------------------------------------------------

/// First candidate path holding a non-null value. The first hit wins
/// outright: a present-but-unusable candidate (say, an empty array) stops
/// the probe rather than falling through to lower-priority paths, which
/// keeps the priority order meaningful.
fn candidate_at<'a>(raw: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|p| raw.pointer(p).filter(|v| !v.is_null()))
}

/// Unwrap list candidates to their first element.
fn first_element(candidate: &Value) -> Option<&Value> {
    match candidate {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

fn body_from_raw(raw: &Value) -> Option<NormalizedBody> {
    let candidate = first_element(candidate_at(raw, BODY_CANDIDATES)?)?;
    match candidate {
        // A bare string is shorthand for the body type.
        Value::String(s) => Some(NormalizedBody {
            id: None,
            model_id: None,
            body_type: Some(s.clone()),
            door_count: None,
            raw: json!({ "type": s }),
        }),
        Value::Object(_) => Some(NormalizedBody {
            id: None,
            model_id: None,
            body_type: first_str(candidate, &["/type", "/bodyType", "/value"]),
            door_count: first_i64(candidate, &["/doors"]),
            raw: candidate.clone(),
        }),
        _ => None,
    }
}

fn engine_from_raw(raw: &Value) -> Option<NormalizedEngine> {
    let candidate = first_element(candidate_at(raw, ENGINE_CANDIDATES)?)?;
    match candidate {
        // A bare string is shorthand for the engine type.
        Value::String(s) => Some(NormalizedEngine {
            id: None,
            model_id: None,
            engine_type: Some(s.clone()),
            horsepower: None,
            raw: json!({ "engine": s }),
        }),
        Value::Object(_) => Some(NormalizedEngine {
            id: None,
            model_id: None,
            engine_type: first_str(candidate, &["/engine", "/engine_type", "/name"]),
            horsepower: first_i64(candidate, &["/horsepower", "/horsepower_hp"]),
            raw: candidate.clone(),
        }),
        _ => None,
    }
}
