//! Storage location client

use crate::error::{Error, Result};
use crate::path::{normalize_prefix, split_storage_uri, StoragePath};
use bytes::Bytes;
use futures::StreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::sync::Arc;

/// One listed object under a prefix
///
/// Produced by [`StorageLocation::list`]; consumed once per conversion task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Full key of the object within its container
    pub key: String,
    /// Object size in bytes
    pub size: usize,
}

/// A storage container bound to a key prefix
///
/// Holds the object store client together with the parsed
/// [`StoragePath`]. The client is constructed once and owned here rather
/// than living in shared global state, so tests can substitute an
/// `object_store::memory::InMemory` implementation.
#[derive(Debug, Clone)]
pub struct StorageLocation {
    store: Arc<dyn ObjectStore>,
    path: StoragePath,
}

impl StorageLocation {
    /// Parse a storage URI and construct the matching client
    ///
    /// - `s3://bucket/prefix` - AWS S3, credentials and endpoint from the
    ///   environment
    /// - anything else - local filesystem path (created if missing)
    pub fn parse(uri: &str) -> Result<Self> {
        if uri.starts_with("s3://") {
            Self::parse_s3(uri)
        } else {
            Self::parse_local(uri)
        }
    }

    fn parse_s3(uri: &str) -> Result<Self> {
        let path = split_storage_uri(uri)?;

        let store = AmazonS3Builder::from_env()
            .with_bucket_name(&path.container)
            .build()
            .map_err(|e| Error::config(format!("Failed to create S3 client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            path,
        })
    }

    fn parse_local(root: &str) -> Result<Self> {
        std::fs::create_dir_all(root)
            .map_err(|e| Error::config(format!("Failed to create directory {root}: {e}")))?;

        let store = LocalFileSystem::new_with_prefix(root)
            .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            path: StoragePath::new(root, ""),
        })
    }

    /// Bind an existing store to a container and prefix
    ///
    /// Intended for tests and embedders that construct their own client.
    pub fn with_store(
        store: Arc<dyn ObjectStore>,
        container: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            path: StoragePath::new(container, prefix),
        }
    }

    /// The container name
    pub fn container(&self) -> &str {
        &self.path.container
    }

    /// The key prefix, normalized to end with a separator
    pub fn prefix(&self) -> String {
        normalize_prefix(&self.path.prefix)
    }

    /// List every object under the prefix
    ///
    /// The underlying listing stream follows pagination transparently;
    /// pages are concatenated in arrival order and no further ordering is
    /// guaranteed. A listing failure aborts with `Error::Listing` - no
    /// partial object list is returned.
    pub async fn list(&self) -> Result<Vec<ObjectEntry>> {
        let prefix = self.prefix();
        let list_prefix = if prefix.is_empty() {
            None
        } else {
            Some(ObjectPath::from(prefix.as_str()))
        };

        let mut stream = self.store.list(list_prefix.as_ref());
        let mut entries = Vec::new();

        while let Some(meta) = stream.next().await {
            let meta = meta.map_err(|e| Error::listing(&prefix, e.to_string()))?;
            entries.push(ObjectEntry {
                key: meta.location.to_string(),
                size: meta.size,
            });
        }

        Ok(entries)
    }

    /// Read one object fully into memory
    pub async fn read(&self, key: &str) -> Result<Bytes> {
        let location = ObjectPath::from(key);
        let result = self
            .store
            .get(&location)
            .await
            .map_err(|e| Error::read(key, e.to_string()))?;

        result
            .bytes()
            .await
            .map_err(|e| Error::read(key, e.to_string()))
    }

    /// Write one object
    pub async fn write(&self, key: &str, data: Bytes) -> Result<()> {
        let location = ObjectPath::from(key);
        self.store
            .put(&location, data.into())
            .await
            .map_err(|e| Error::write(key, e.to_string()))?;

        Ok(())
    }
}
