use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File storage is unavailable: {0}")]
    Unavailable(String),
}

/// Backend-agnostic file persistence. The concrete backend is picked once
/// at startup from config; everything else only sees this trait.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist `bytes` under `subfolder` and return the URL or path to
    /// reference it by.
    async fn store(
        &self,
        bytes: &[u8],
        subfolder: &str,
        filename: &str,
    ) -> Result<String, StorageError>;

    /// Remove a previously stored file. Deleting a file that is already
    /// gone is not an error.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;
}

/// Chooses the remote object store when a read-write token is configured,
/// local disk otherwise.
pub fn storage_from_config(config: &Config) -> std::sync::Arc<dyn FileStorage> {
    match (&config.blob_store_url, &config.blob_store_token) {
        (Some(url), Some(token)) => std::sync::Arc::new(RemoteBlobStorage::new(
            url.clone(),
            token.clone(),
        )),
        _ => std::sync::Arc::new(LocalDiskStorage::new(&config.upload_dir)),
    }
}

pub struct LocalDiskStorage {
    root: PathBuf,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> LocalDiskStorage {
        LocalDiskStorage { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        // Stored paths are relative to the static root, e.g.
        // "uploads/images/xyz.jpg" under "static/uploads".
        match path.strip_prefix("uploads/") {
            Some(rest) => self.root.join(rest),
            None => self.root.join(path),
        }
    }
}

#[async_trait]
impl FileStorage for LocalDiskStorage {
    async fn store(
        &self,
        bytes: &[u8],
        subfolder: &str,
        filename: &str,
    ) -> Result<String, StorageError> {
        let dir = self.root.join(subfolder);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        let target = dir.join(filename);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        Ok(format!("uploads/{}/{}", subfolder, filename))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let target = self.resolve(path);
        match tokio::fs::remove_file(Path::new(&target)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }
}

pub struct RemoteBlobStorage {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RemoteBlobStorage {
    pub fn new(base_url: String, token: String) -> RemoteBlobStorage {
        RemoteBlobStorage {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

#[async_trait]
impl FileStorage for RemoteBlobStorage {
    async fn store(
        &self,
        bytes: &[u8],
        subfolder: &str,
        filename: &str,
    ) -> Result<String, StorageError> {
        let upload_url = format!("{}/{}/{}", self.base_url, subfolder, filename);

        let response = self
            .client
            .put(&upload_url)
            .bearer_auth(&self.token)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Unavailable(format!(
                "blob store returned {}",
                response.status()
            )));
        }

        // The store answers with the public URL of the uploaded blob
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        body.get("url")
            .and_then(|u| u.as_str())
            .map(|u| u.to_string())
            .ok_or_else(|| StorageError::Unavailable("blob store response missing url".to_string()))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(&self.base_url)
            .bearer_auth(&self.token)
            .query(&[("url", path)])
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if response.status().is_success() || response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(StorageError::Unavailable(format!(
                "blob store returned {}",
                response.status()
            )))
        }
    }
}
