//! Raw response extractor — unwraps the record list from a heterogeneous
//! API payload.
//!
//! The upstream API is not consistent about envelopes: depending on the
//! endpoint (and sometimes the plan tier) the record list arrives bare, or
//! wrapped under `data`, `collection.data`, `results`, or `items`. Rather
//! than duck-typed field probing, the known shapes are decoded as an
//! explicit tagged union tried in priority order, so an unrecognized shape
//! is an exhaustive non-match instead of a silent guess.

use serde::Deserialize;
use serde_json::Value;

/// The known wrapper shapes, in match priority order.
///
/// `serde(untagged)` tries variants top to bottom, which is exactly the
/// documented probe order: a bare array wins over everything, then `data`,
/// `collection.data`, `results`, `items`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResponseShape {
    Bare(Vec<Value>),
    Data { data: Vec<Value> },
    Collection { collection: CollectionEnvelope },
    Results { results: Vec<Value> },
    Items { items: Vec<Value> },
}

/// The inner `{ "data": [...] }` envelope of the `collection` shape.
#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope {
    pub data: Vec<Value>,
}

impl ResponseShape {
    /// Consume the shape and return the wrapped record list.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            ResponseShape::Bare(records) => records,
            ResponseShape::Data { data } => data,
            ResponseShape::Collection { collection } => collection.data,
            ResponseShape::Results { results } => results,
            ResponseShape::Items { items } => items,
        }
    }
}

/// Return the record list wrapped inside `response`, or an empty list.
///
/// Never errors: `null`, scalars, strings (e.g. a body that failed to parse
/// as JSON upstream), and unknown envelopes all degrade to an empty result.
/// Callers must treat empty as "no data available", not as failure.
pub fn extract_array(response: Value) -> Vec<Value> {
    match serde_json::from_value::<ResponseShape>(response) {
        Ok(shape) => shape.into_records(),
        Err(_) => Vec::new(),
    }
}
