//! Cart state — pure operations on a [`Cart`] value plus a file-backed
//! [`CartStore`] with `load`/`save`/`clear` as its only side effects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed file name of the cached cart blob.
pub const CART_FILE: &str = "cart.json";

/// One car held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub car_id: i64,
    /// Unit price at the time the car was added.
    pub price: i64,
    pub quantity: i64,
    pub added_at: DateTime<Utc>,
}

/// The cart itself. All operations are pure value manipulation; persistence
/// goes through [`CartStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add `quantity` of a car; an already-present car merges quantities.
    pub fn add(&mut self, car_id: i64, price: i64, quantity: i64) {
        match self.items.iter_mut().find(|i| i.car_id == car_id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                car_id,
                price,
                quantity,
                added_at: Utc::now(),
            }),
        }
    }

    pub fn remove(&mut self, car_id: i64) {
        self.items.retain(|i| i.car_id != car_id);
    }

    /// Set a car's quantity; zero or below removes the item.
    pub fn update_quantity(&mut self, car_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(car_id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.car_id == car_id) {
            item.quantity = quantity;
        }
    }

    pub fn total(&self) -> i64 {
        self.items.iter().map(|i| i.price * i.quantity).sum()
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// File-backed cart store, same pattern as the session store.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// A missing or corrupt blob loads as an empty cart.
    pub fn load(&self) -> Cart {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, cart: &Cart) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(cart).expect("cart serializes");
        std::fs::write(&self.path, text)
    }

    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
