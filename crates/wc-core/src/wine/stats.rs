//! Aggregate statistics over the cellar collection.
//!
//! Pure, order-independent reductions, recomputed on demand. The personal
//! inventory scale makes caching pointless.

use std::collections::HashMap;

use crate::wine::WineRecord;

/// Sentinel bucket for records without a country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellarStats {
    pub total_bottles: u64,
    /// Sum of price x quantity; records without a price count as 0.
    pub total_value: f64,
    pub bottles_per_country: HashMap<String, u64>,
}

pub fn total_bottles(records: &[WineRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.quantity)).sum()
}

pub fn total_value(records: &[WineRecord]) -> f64 {
    records
        .iter()
        .map(|r| r.price.unwrap_or(0.0) * f64::from(r.quantity))
        .sum()
}

pub fn bottles_per_country(records: &[WineRecord]) -> HashMap<String, u64> {
    let mut acc: HashMap<String, u64> = HashMap::new();
    for record in records {
        let country = record
            .country
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNKNOWN_COUNTRY);
        *acc.entry(country.to_string()).or_insert(0) += u64::from(record.quantity);
    }
    acc
}

pub fn cellar_stats(records: &[WineRecord]) -> CellarStats {
    CellarStats {
        total_bottles: total_bottles(records),
        total_value: total_value(records),
        bottles_per_country: bottles_per_country(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::WineId;

    fn record(country: Option<&str>, quantity: u32, price: Option<f64>) -> WineRecord {
        WineRecord {
            id: WineId::new(),
            name: "test".to_string(),
            grape: None,
            country: country.map(str::to_string),
            vintage: None,
            location: None,
            quantity,
            price,
            photo_url: None,
        }
    }

    #[test]
    fn total_value_treats_missing_price_as_zero() {
        let records = vec![
            record(None, 2, Some(10.0)),
            record(None, 3, None),
        ];
        assert_eq!(total_value(&records), 20.0);
        assert_eq!(total_bottles(&records), 5);
    }

    #[test]
    fn bottles_per_country_uses_unknown_sentinel() {
        let records = vec![
            record(Some("France"), 2, None),
            record(None, 1, None),
            record(Some("France"), 1, None),
        ];
        let per_country = bottles_per_country(&records);
        assert_eq!(per_country.get("France"), Some(&3));
        assert_eq!(per_country.get(UNKNOWN_COUNTRY), Some(&1));
        assert_eq!(per_country.len(), 2);
    }

    #[test]
    fn empty_collection_reduces_to_zero() {
        let stats = cellar_stats(&[]);
        assert_eq!(stats.total_bottles, 0);
        assert_eq!(stats.total_value, 0.0);
        assert!(stats.bottles_per_country.is_empty());
    }

    #[test]
    fn depleted_records_still_count_for_country_buckets() {
        let records = vec![record(Some("Italy"), 0, Some(15.0))];
        let stats = cellar_stats(&records);
        assert_eq!(stats.total_bottles, 0);
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.bottles_per_country.get("Italy"), Some(&0));
    }
}
