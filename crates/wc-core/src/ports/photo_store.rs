use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::errors::PhotoUploadError;

/// Object storage for bottle photos.
///
/// `upload` stores the bytes under a collision-resistant key derived from a
/// high-resolution timestamp plus the original file name, and returns a URL
/// resolvable without further authentication. On failure no partial state
/// is left behind.
#[async_trait]
pub trait PhotoStorePort: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, PhotoUploadError>;
}

#[async_trait]
impl<T: PhotoStorePort + ?Sized> PhotoStorePort for Arc<T> {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, PhotoUploadError> {
        (**self).upload(file_name, bytes).await
    }
}
