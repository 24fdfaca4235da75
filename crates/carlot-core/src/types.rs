//! Canonical record shapes shared across the pipeline layers.
//!
//! The three `Normalized*` records are what the normalizer produces from raw
//! API records and what the matcher joins. Each keeps a reference to its
//! original raw record so the matcher's heuristic fallback can dig into
//! denormalized fields the canonical shape does not cover.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A model record reduced to a predictable field set.
///
/// `id` is the join key used by the matcher; everything else is best-effort
/// and may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedModel {
    pub id: Option<i64>,
    pub make_id: Option<i64>,
    pub make_name: Option<String>,
    pub name: Option<String>,
    /// Original raw record, read-only, for fallback lookups.
    pub raw: Value,
}

/// A body record reduced to a predictable field set.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBody {
    pub id: Option<i64>,
    /// Model this body belongs to, resolved through a nested fallback chain.
    pub model_id: Option<i64>,
    pub body_type: Option<String>,
    pub door_count: Option<i64>,
    pub raw: Value,
}

/// An engine record reduced to a predictable field set.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEngine {
    pub id: Option<i64>,
    /// Model this engine belongs to, resolved through a nested fallback chain.
    pub model_id: Option<i64>,
    pub engine_type: Option<String>,
    pub horsepower: Option<i64>,
    pub raw: Value,
}

/// Availability status of a car, as stored in the `cars` collection.
///
/// Newly assembled cars are always [`CarStatus::Available`]; the other
/// variants appear on documents edited through the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Sold,
    Maintenance,
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarStatus::Available => write!(f, "available"),
            CarStatus::Sold => write!(f, "sold"),
            CarStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}
