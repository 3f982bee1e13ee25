//! External wine-catalog domain types.
//!
//! Candidates come from a read-only HTTP catalog and are only ever used to
//! pre-fill a draft; they are never persisted.

use serde::{Deserialize, Serialize};

/// Minimum search-term length before a remote lookup is issued. Shorter
/// terms resolve to an empty result set without a request.
pub const MIN_SEARCH_TERM_LEN: usize = 3;

/// A read-only record from the external wine catalog.
///
/// Field names mirror the catalog API: `wine` is the display name, `winery`
/// the producer, `location` the region/country string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCandidate {
    pub id: i64,
    pub wine: String,
    pub winery: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
}

impl CatalogCandidate {
    /// Case-insensitive substring match against the candidate's name.
    pub fn matches_term(&self, term: &str) -> bool {
        self.wine.to_lowercase().contains(&term.to_lowercase())
    }
}

/// True when the term is long enough to justify a remote lookup.
pub fn term_is_searchable(term: &str) -> bool {
    term.chars().count() >= MIN_SEARCH_TERM_LEN
}

/// Client-side filter over the full remote set; the catalog API has no
/// server-side filtering.
pub fn filter_candidates(candidates: Vec<CatalogCandidate>, term: &str) -> Vec<CatalogCandidate> {
    candidates
        .into_iter()
        .filter(|c| c.matches_term(term))
        .collect()
}
