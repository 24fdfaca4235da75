//! The [`Inventory`] — the in-memory, fully assembled car collection for
//! one fetch cycle.
//!
//! The inventory owns its cars: callers read through accessors and mutate
//! through the delegating methods, never by reaching into the list. It is
//! rebuilt whole on every fetch cycle; there is no incremental merge with a
//! previous inventory and no deletion path.

use serde::Serialize;

use crate::car::Car;

/// Ordered car collection, unique by id, in models-array order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    cars: Vec<Car>,
}

impl Inventory {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Filter by search term and price range, AND-combined.
    ///
    /// The term matches case-insensitively as a substring of make, model
    /// name, or year; an empty term matches everything. `None` for the range
    /// matches every price.
    pub fn filter_cars(&self, search_term: &str, price_range: Option<PriceRange>) -> Vec<&Car> {
        let term = search_term.to_lowercase();
        self.cars
            .iter()
            .filter(|car| {
                let matches_term = term.is_empty()
                    || car
                        .make_name
                        .as_deref()
                        .is_some_and(|m| m.to_lowercase().contains(&term))
                    || car
                        .name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&term))
                    || car.year.to_string().contains(&term);
                let matches_price = price_range.map_or(true, |r| r.matches(car.price));
                matches_term && matches_price
            })
            .collect()
    }

    /// Point every car at the same image.
    pub fn update_all_images(&mut self, path: &str) {
        for car in &mut self.cars {
            car.change_image(path);
        }
    }

    /// Update one car's image by id. Returns `false` when the id is absent.
    pub fn update_car_image(&mut self, id: i64, path: &str) -> bool {
        match self.cars.iter_mut().find(|c| c.id == Some(id)) {
            Some(car) => {
                car.change_image(path);
                true
            }
            None => false,
        }
    }

    /// Sell `qty` units of the car with the given id.
    ///
    /// Returns `false` both when the id is absent and when the car itself
    /// rejects the sale.
    pub fn sell_car(&mut self, id: i64, qty: i64) -> bool {
        match self.cars.iter_mut().find(|c| c.id == Some(id)) {
            Some(car) => car.sell(qty),
            None => false,
        }
    }

    /// Project every car into its stock-report row.
    pub fn generate_report(&self) -> Vec<ReportEntry> {
        self.cars
            .iter()
            .map(|car| ReportEntry {
                id: car.id,
                make_id: car.make_id,
                name: car.name.clone(),
                sold_qty: car.sold_qty,
                remaining_stock: car.remaining_stock(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Price ranges
// ---------------------------------------------------------------------------

/// The four fixed price buckets offered by the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// `0-10000`: strictly below 10 000.
    Under10k,
    /// `10000-25000`: inclusive of both bounds.
    From10kTo25k,
    /// `25000-50000`: inclusive of both bounds.
    From25kTo50k,
    /// `50000+`: strictly above 50 000.
    Over50k,
}

impl PriceRange {
    pub fn matches(self, price: i64) -> bool {
        match self {
            PriceRange::Under10k => price < 10_000,
            PriceRange::From10kTo25k => (10_000..=25_000).contains(&price),
            PriceRange::From25kTo50k => (25_000..=50_000).contains(&price),
            PriceRange::Over50k => price > 50_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown price range tag: {0:?}")]
pub struct UnknownPriceRange(String);

impl std::str::FromStr for PriceRange {
    type Err = UnknownPriceRange;

    /// Parse the wire tags used by the search form.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "0-10000" => Ok(PriceRange::Under10k),
            "10000-25000" => Ok(PriceRange::From10kTo25k),
            "25000-50000" => Ok(PriceRange::From25kTo50k),
            "50000+" => Ok(PriceRange::Over50k),
            other => Err(UnknownPriceRange(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// One row of the exported stock report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub id: Option<i64>,
    pub make_id: Option<i64>,
    pub name: Option<String>,
    pub sold_qty: i64,
    pub remaining_stock: i64,
}
