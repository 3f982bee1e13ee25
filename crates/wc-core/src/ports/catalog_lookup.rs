use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::CatalogCandidate;
use crate::ports::errors::CatalogLookupError;

/// Read-only lookup against the external wine catalog.
///
/// Terms shorter than [`MIN_SEARCH_TERM_LEN`](crate::catalog::MIN_SEARCH_TERM_LEN)
/// resolve to an empty sequence without a remote call. Matching is a
/// client-side case-insensitive substring test over the full remote set;
/// the catalog API does not filter server-side.
#[async_trait]
pub trait CatalogLookupPort: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<CatalogCandidate>, CatalogLookupError>;
}

#[async_trait]
impl<T: CatalogLookupPort + ?Sized> CatalogLookupPort for Arc<T> {
    async fn search(&self, term: &str) -> Result<Vec<CatalogCandidate>, CatalogLookupError> {
        (**self).search(term).await
    }
}
