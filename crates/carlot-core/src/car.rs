//! The [`Car`] value object and its derivation rules.
//!
//! A `Car` is constructed exactly once per matched triple during pipeline
//! assembly. `price` and `description` are derived at construction and never
//! recomputed; `sell` and `change_image` are the only permitted mutations
//! afterwards.

use serde::Serialize;

use crate::matcher::MatchedTriple;
use crate::types::CarStatus;

/// Makes that raise the base price estimate. Matched by substring so
/// variants like "BMW M" or "Land Rover Classic" still qualify.
pub const LUXURY_MAKES: &[&str] = &[
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Lexus",
    "Porsche",
    "Jaguar",
    "Land Rover",
];

const BASE_PRICE: i64 = 20_000;
const LUXURY_BASE_PRICE: i64 = 40_000;
const PRICE_FLOOR: i64 = 15_000;
const PRICE_CEILING: i64 = 150_000;
/// Horsepower adjustment pivots around this figure, at 50 per hp.
const HP_PIVOT: i64 = 150;
const PRICE_PER_HP: i64 = 50;

/// A fully assembled car, ready for display, filtering, and import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub id: Option<i64>,
    pub make_id: Option<i64>,
    pub make_name: Option<String>,
    pub name: Option<String>,
    pub body_type: Option<String>,
    pub door_count: Option<i64>,
    pub engine_type: Option<String>,
    pub horsepower: Option<i64>,
    /// The year the source request was scoped to; constant per assembly,
    /// not derived per car.
    pub year: i32,
    /// Derived once at construction; there is no live repricing.
    pub price: i64,
    pub status: CarStatus,
    pub description: String,
    pub image_path: String,
    pub stock_qty: i64,
    pub sold_qty: i64,
}

impl Car {
    /// Build a car from a matched triple.
    ///
    /// `year`, `stock_qty`, and `image_path` come from configuration, not
    /// from the records themselves.
    pub fn from_triple(triple: &MatchedTriple, year: i32, stock_qty: i64, image_path: &str) -> Self {
        let model = &triple.model;
        let body = triple.body.as_ref();
        let engine = triple.engine.as_ref();

        let make_name = model.make_name.clone();
        let name = model.name.clone();
        let body_type = body.and_then(|b| b.body_type.clone());
        let door_count = body.and_then(|b| b.door_count);
        let engine_type = engine.and_then(|e| e.engine_type.clone());
        let horsepower = engine.and_then(|e| e.horsepower);

        let price = derive_price(make_name.as_deref(), horsepower);
        let description = derive_description(
            year,
            make_name.as_deref(),
            name.as_deref(),
            body_type.as_deref(),
            engine_type.as_deref(),
            horsepower,
            door_count,
        );

        Car {
            id: model.id,
            make_id: model.make_id,
            make_name,
            name,
            body_type,
            door_count,
            engine_type,
            horsepower,
            year,
            price,
            status: CarStatus::Available,
            description,
            image_path: image_path.to_string(),
            stock_qty,
            sold_qty: 0,
        }
    }

    /// Record a sale of `qty` units.
    ///
    /// Rejected (returns `false`, no mutation) when `qty <= 0` or the sale
    /// would exceed stock. This is the only inventory-depletion path; stock
    /// never replenishes.
    pub fn sell(&mut self, qty: i64) -> bool {
        if qty <= 0 {
            return false;
        }
        if self.sold_qty + qty > self.stock_qty {
            return false;
        }
        self.sold_qty += qty;
        true
    }

    /// Overwrite the image path. No validation.
    pub fn change_image(&mut self, path: impl Into<String>) {
        self.image_path = path.into();
    }

    /// Units still available for sale.
    pub fn remaining_stock(&self) -> i64 {
        self.stock_qty - self.sold_qty
    }
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Base-price heuristic: 20 000, raised to 40 000 for luxury makes, plus
/// 50 per horsepower above 150 when horsepower is known (0 counts as
/// known), clamped to [15 000, 150 000].
fn derive_price(make_name: Option<&str>, horsepower: Option<i64>) -> i64 {
    let luxury = make_name
        .map(|make| LUXURY_MAKES.iter().any(|lux| make.contains(lux)))
        .unwrap_or(false);
    let mut price = if luxury { LUXURY_BASE_PRICE } else { BASE_PRICE };
    if let Some(hp) = horsepower {
        price += (hp - HP_PIVOT) * PRICE_PER_HP;
    }
    price.clamp(PRICE_FLOOR, PRICE_CEILING)
}

/// One templated sentence, skipping clauses whose field is unknown.
fn derive_description(
    year: i32,
    make_name: Option<&str>,
    name: Option<&str>,
    body_type: Option<&str>,
    engine_type: Option<&str>,
    horsepower: Option<i64>,
    door_count: Option<i64>,
) -> String {
    let mut desc = format!("A {year}");
    if let Some(make) = make_name {
        desc.push(' ');
        desc.push_str(make);
    }
    if let Some(name) = name {
        desc.push(' ');
        desc.push_str(name);
    }
    if let Some(body) = body_type {
        desc.push_str(&format!(" in {body} body style"));
    }
    if let Some(engine) = engine_type {
        desc.push_str(&format!(" with {engine} engine"));
    }
    if let Some(hp) = horsepower {
        desc.push_str(&format!(" producing {hp} horsepower"));
    }
    if let Some(doors) = door_count {
        desc.push_str(&format!(" and {doors} doors"));
    }
    desc.push('.');
    desc
}
