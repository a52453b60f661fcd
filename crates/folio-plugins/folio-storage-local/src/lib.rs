//! # folio-storage-local
//!
//! Local filesystem implementation of `AssetStore`. Uploaded assets are
//! stored content-addressed: the SHA-256 of the bytes is the asset id,
//! which deduplicates repeat uploads for free. Fixed-name files (the
//! resume PDF) live in the same root and are read through the same path.

use async_trait::async_trait;
use folio_core::error::{AppError, Result};
use folio_core::traits::AssetStore;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tokio::fs;

pub struct LocalAssetStore {
    /// Root directory for all assets (e.g., "./data/assets").
    root: PathBuf,
}

impl LocalAssetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Asset names are flat; anything that looks like a path is rejected
    /// before it reaches the filesystem.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(AppError::ValidationError(format!(
                "invalid asset name: {name:?}"
            )));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    /// Streams a stored asset back unchanged. A missing file is reported as
    /// `NotFound` so callers can skip rendering instead of failing the page.
    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("asset".into(), name.into()))
            }
            Err(e) => Err(AppError::Internal(e.to_string())),
        }
    }

    /// Saves an upload using its SHA-256 hash as the asset id.
    async fn save(&self, data: Vec<u8>) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(&data);
        let id = format!("{:x}", hasher.finalize());

        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let target = self.root.join(&id);
        if !target.exists() {
            fs::write(&target, &data)
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?;
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path().to_path_buf());

        let id = store.save(vec![1, 2, 3, 4]).await.unwrap();
        assert_eq!(store.read(&id).await.unwrap(), vec![1, 2, 3, 4]);

        // Content-addressed: the same bytes get the same id.
        let again = store.save(vec![1, 2, 3, 4]).await.unwrap();
        assert_eq!(id, again);
    }

    #[tokio::test]
    async fn test_missing_asset_is_distinguishable() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path().to_path_buf());

        match store.read("resume.pdf").await {
            Err(AppError::NotFound(kind, name)) => {
                assert_eq!(kind, "asset");
                assert_eq!(name, "resume.pdf");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_path_like_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path().to_path_buf());

        for name in ["", "../secret", "a/b", "a\\b"] {
            assert!(matches!(
                store.read(name).await,
                Err(AppError::ValidationError(_))
            ));
        }
    }
}
