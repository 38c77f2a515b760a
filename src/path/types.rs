//! Storage path types

/// A storage location split into container and key prefix
///
/// Produced by [`split_storage_uri`](super::split_storage_uri) and immutable
/// thereafter. The prefix is kept exactly as it appeared in the URI; callers
/// that list or map keys normalize it first with
/// [`normalize_prefix`](super::normalize_prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    /// Bucket / container name
    pub container: String,
    /// Key prefix within the container (may be empty)
    pub prefix: String,
}

impl StoragePath {
    /// Create a storage path from parts
    pub fn new(container: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            prefix: prefix.into(),
        }
    }
}

impl std::fmt::Display for StoragePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.container, self.prefix)
    }
}
