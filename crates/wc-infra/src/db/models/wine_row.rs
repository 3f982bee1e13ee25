use diesel::prelude::*;

use wc_core::wine::{NewWineRecord, WineRecord};
use wc_core::WineId;

use crate::db::schema::t_wine;

#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = t_wine)]
pub struct WineRow {
    pub id: String,
    pub name: String,
    pub grape: Option<String>,
    pub country: Option<String>,
    pub vintage: Option<i32>,
    pub location: Option<String>,
    pub quantity: i32,
    pub price: Option<f64>,
    pub photo_url: Option<String>,
    pub created_at: i64,
}

impl WineRow {
    pub fn from_new(record: NewWineRecord, record_id: WineId, created_at: i64) -> Self {
        Self {
            id: record_id.into_inner(),
            name: record.name,
            grape: record.grape,
            country: record.country,
            vintage: record.vintage,
            location: record.location,
            quantity: record.quantity as i32,
            price: record.price,
            photo_url: record.photo_url,
            created_at,
        }
    }
}

impl From<WineRow> for WineRecord {
    fn from(row: WineRow) -> Self {
        WineRecord {
            id: WineId::from_string(row.id),
            name: row.name,
            grape: row.grape,
            country: row.country,
            vintage: row.vintage,
            location: row.location,
            // Negative quantities are unrepresentable in the domain.
            quantity: row.quantity.max(0) as u32,
            price: row.price,
            photo_url: row.photo_url,
        }
    }
}
