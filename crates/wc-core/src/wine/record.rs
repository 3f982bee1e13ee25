use serde::{Deserialize, Serialize};

use crate::ids::WineId;

/// A single owned bottle-type entry in the cellar.
///
/// Records are created once from a draft, mutated only by quantity
/// decrements, and never deleted. A record whose quantity reaches zero is
/// retained as depleted for statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    pub id: WineId,
    pub name: String,
    pub grape: Option<String>,
    pub country: Option<String>,
    /// Vintage year.
    pub vintage: Option<i32>,
    /// Free-text cellar position.
    pub location: Option<String>,
    pub quantity: u32,
    /// Price per bottle.
    pub price: Option<f64>,
    /// Set only after a successful photo upload.
    pub photo_url: Option<String>,
}

impl WineRecord {
    pub fn is_depleted(&self) -> bool {
        self.quantity == 0
    }
}

/// The fields of a record about to be persisted; the store assigns the id
/// and returns the canonical [`WineRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWineRecord {
    pub name: String,
    pub grape: Option<String>,
    pub country: Option<String>,
    pub vintage: Option<i32>,
    pub location: Option<String>,
    pub quantity: u32,
    pub price: Option<f64>,
    pub photo_url: Option<String>,
}

impl NewWineRecord {
    /// Required-field rule: name must be non-empty after trimming.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn into_record(self, id: WineId) -> WineRecord {
        WineRecord {
            id,
            name: self.name,
            grape: self.grape,
            country: self.country,
            vintage: self.vintage,
            location: self.location,
            quantity: self.quantity,
            price: self.price,
            photo_url: self.photo_url,
        }
    }
}
