use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use wc_core::ports::{ClockPort, PhotoStorePort, PhotoUploadError};

/// Filesystem-backed photo store.
///
/// Keys combine the clock's millisecond timestamp with the sanitized
/// original file name; the returned URL joins the public base with the key.
/// Nothing is written on failure.
pub struct FsPhotoStore<C: ClockPort> {
    root: PathBuf,
    public_base: String,
    clock: C,
}

impl<C: ClockPort> FsPhotoStore<C> {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>, clock: C) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
            clock,
        }
    }
}

/// Keep the key shell- and URL-safe: alphanumerics, dot, dash, underscore.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[async_trait]
impl<C: ClockPort> PhotoStorePort for FsPhotoStore<C> {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, PhotoUploadError> {
        let sanitized = sanitize_file_name(file_name.trim());
        if sanitized.is_empty() {
            return Err(PhotoUploadError::Rejected("empty file name".into()));
        }

        let key = format!("{}-{}", self.clock.now_ms(), sanitized);

        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| PhotoUploadError::Unavailable(e.to_string()))?;
        fs::write(self.root.join(&key), bytes)
            .await
            .map_err(|e| PhotoUploadError::Unavailable(e.to_string()))?;

        let url = format!("{}/{}", self.public_base.trim_end_matches('/'), key);
        debug!(key = %key, size_bytes = bytes.len(), "photo stored");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    #[tokio::test]
    async fn upload_writes_bytes_and_returns_public_url() {
        let dir = TempDir::new().unwrap();
        let store = FsPhotoStore::new(dir.path(), "https://photos.example/", FixedClock(1700));

        let url = store.upload("label.jpg", b"jpeg bytes").await.unwrap();
        assert_eq!(url, "https://photos.example/1700-label.jpg");

        let stored = std::fs::read(dir.path().join("1700-label.jpg")).unwrap();
        assert_eq!(stored, b"jpeg bytes");
    }

    #[tokio::test]
    async fn keys_sanitize_awkward_file_names() {
        let dir = TempDir::new().unwrap();
        let store = FsPhotoStore::new(dir.path(), "https://photos.example", FixedClock(1));

        let url = store.upload("my cellar/été.jpg", b"x").await.unwrap();
        assert_eq!(url, "https://photos.example/1-my-cellar--t-.jpg");
    }

    #[tokio::test]
    async fn empty_file_name_is_rejected_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = FsPhotoStore::new(dir.path(), "https://photos.example", FixedClock(1));

        let err = store.upload("   ", b"x").await.unwrap_err();
        assert!(matches!(err, PhotoUploadError::Rejected(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
