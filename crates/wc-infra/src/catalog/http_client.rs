use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use wc_core::catalog::{self, CatalogCandidate};
use wc_core::ports::{CatalogLookupError, CatalogLookupPort};

/// Client for the read-only wine catalog API.
///
/// The endpoint returns the full category as one JSON array and supports no
/// query parameters; filtering happens client-side. Terms below the
/// three-character threshold never reach the network.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogLookupPort for HttpCatalogClient {
    async fn search(&self, term: &str) -> Result<Vec<CatalogCandidate>, CatalogLookupError> {
        if !catalog::term_is_searchable(term) {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| CatalogLookupError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| CatalogLookupError::Unavailable(e.to_string()))?;

        let wires: Vec<CatalogWireRecord> = response
            .json()
            .await
            .map_err(|e| CatalogLookupError::Unavailable(e.to_string()))?;

        let candidates: Vec<CatalogCandidate> =
            wires.into_iter().map(CatalogCandidate::from).collect();
        debug!(term, fetched = candidates.len(), "catalog fetched");

        Ok(catalog::filter_candidates(candidates, term))
    }
}

/// Wire shape of a catalog entry. The API is loose: `rating` may be a bare
/// number or an object with a stringly `average`, and ids are occasionally
/// missing.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogWireRecord {
    #[serde(default)]
    id: i64,
    wine: String,
    #[serde(default)]
    winery: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    rating: Option<f64>,
}

impl From<CatalogWireRecord> for CatalogCandidate {
    fn from(wire: CatalogWireRecord) -> Self {
        CatalogCandidate {
            id: wire.id,
            wine: wire.wine,
            winery: wire.winery,
            location: wire.location,
            rating: wire.rating,
        }
    }
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Object(map) => map.get("average").and_then(|avg| match avg {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn short_term_resolves_empty_without_a_request() {
        // Endpoint is unroutable; a network attempt would error, not return Ok.
        let client = HttpCatalogClient::new("http://127.0.0.1:0/wines");
        let results = client.search("Ma").await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn decodes_object_shaped_ratings() {
        let payload = r#"[
            {"id": 1, "wine": "Malbec Reserve", "winery": "Bodega Norton",
             "location": "Argentina", "rating": {"average": "4.7", "reviews": "50 ratings"}},
            {"id": 2, "wine": "Pinot Noir", "rating": 4.2},
            {"wine": "Mystery Red", "extra_field": true}
        ]"#;
        let wires: Vec<CatalogWireRecord> = serde_json::from_str(payload).unwrap();
        let candidates: Vec<CatalogCandidate> =
            wires.into_iter().map(CatalogCandidate::from).collect();

        assert_eq!(candidates[0].rating, Some(4.7));
        assert_eq!(candidates[0].winery.as_deref(), Some("Bodega Norton"));
        assert_eq!(candidates[1].rating, Some(4.2));
        assert_eq!(candidates[2].id, 0);
        assert!(candidates[2].rating.is_none());
    }

    #[test]
    fn wire_records_filter_like_the_original() {
        let payload = r#"[
            {"id": 1, "wine": "Malbec Reserve"},
            {"id": 2, "wine": "Pinot Noir"}
        ]"#;
        let wires: Vec<CatalogWireRecord> = serde_json::from_str(payload).unwrap();
        let candidates = wires.into_iter().map(CatalogCandidate::from).collect();
        let filtered = catalog::filter_candidates(candidates, "Mal");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].wine, "Malbec Reserve");
    }
}
