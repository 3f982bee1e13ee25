use thiserror::Error;

/// Failures of the inventory store boundary.
///
/// Nothing here is fatal: the view-model degrades to "state unchanged,
/// user can retry".
#[derive(Debug, Error)]
pub enum InventoryStoreError {
    /// A required field is absent (at minimum, a non-empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An update targeted a record that does not exist.
    #[error("wine record not found: {0}")]
    NotFound(String),

    /// Transport or auth failure talking to the store.
    #[error("inventory store unavailable: {0}")]
    Unavailable(String),
}

/// Transport failure of the external catalog lookup. Always swallowed by
/// the caller; catalog search is a convenience, not a required path.
#[derive(Debug, Error)]
pub enum CatalogLookupError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Photo upload failures. The draft's photo URL is left unchanged on any
/// of these.
#[derive(Debug, Error)]
pub enum PhotoUploadError {
    /// Transport or quota failure.
    #[error("photo upload failed: {0}")]
    Unavailable(String),

    /// The store refused the file (empty name, unusable key).
    #[error("photo rejected: {0}")]
    Rejected(String),
}
