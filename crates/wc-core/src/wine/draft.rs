use serde::{Deserialize, Serialize};

use crate::wine::NewWineRecord;

/// The in-progress new-record form state.
///
/// A partial [`WineRecord`](crate::wine::WineRecord) without an id. Reset to
/// [`DraftEntry::default`] after a successful commit; a failed commit leaves
/// it intact so user input is not lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub name: String,
    pub grape: Option<String>,
    pub country: Option<String>,
    pub vintage: Option<i32>,
    pub location: Option<String>,
    pub quantity: u32,
    pub price: Option<f64>,
    pub photo_url: Option<String>,
}

impl Default for DraftEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            grape: None,
            country: None,
            vintage: None,
            location: None,
            quantity: 1,
            price: None,
            photo_url: None,
        }
    }
}

impl DraftEntry {
    /// The sole required-field rule for committing a draft.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_new_record(&self) -> NewWineRecord {
        NewWineRecord {
            name: self.name.trim().to_string(),
            grape: self.grape.clone(),
            country: self.country.clone(),
            vintage: self.vintage,
            location: self.location.clone(),
            quantity: self.quantity,
            price: self.price,
            photo_url: self.photo_url.clone(),
        }
    }
}
