//! Storage URI splitting

use super::types::StoragePath;
use crate::error::{Error, Result};

/// The storage URI scheme recognized by this crate
pub(crate) const SCHEME: &str = "s3://";

/// Split a storage URI into container and key prefix
///
/// `s3://bucket/a/b/c` yields `{container: "bucket", prefix: "a/b/c"}`.
/// A URI with no key part (`s3://bucket`) yields an empty prefix.
/// A URI without the `s3://` scheme is rejected up front rather than
/// surfacing later as a listing failure against a bogus bucket name.
pub fn split_storage_uri(uri: &str) -> Result<StoragePath> {
    let without_scheme = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| Error::path(uri, format!("expected a {SCHEME} URI")))?;

    if without_scheme.is_empty() {
        return Err(Error::path(uri, "missing container name"));
    }

    let (container, prefix) = match without_scheme.find('/') {
        Some(idx) => (&without_scheme[..idx], &without_scheme[idx + 1..]),
        None => (without_scheme, ""),
    };

    Ok(StoragePath::new(container, prefix))
}

/// Normalize a key prefix to end with exactly one separator
///
/// Listing and key mapping both require the prefix in this form so that
/// stripping it from a key leaves a clean relative path. The empty prefix
/// stays empty and selects the whole container.
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!("{}/", prefix.trim_end_matches('/'))
    }
}
