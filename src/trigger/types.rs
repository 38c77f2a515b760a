//! Trigger event and response types
//!
//! Field names mirror the storage-change notification JSON emitted by the
//! storage service.

use serde::{Deserialize, Serialize};

/// A batch of storage-change notification records
#[derive(Debug, Clone, Deserialize)]
pub struct EventNotification {
    /// The notification records, possibly empty
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

/// One storage-change record
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// Storage entity carrying bucket and object identifiers
    pub s3: StorageEntity,
}

/// The storage entity of one record
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEntity {
    /// The affected bucket
    pub bucket: BucketEntity,
    /// The affected object
    pub object: ObjectEntity,
}

/// Bucket identifier within a record
#[derive(Debug, Clone, Deserialize)]
pub struct BucketEntity {
    /// Bucket name
    pub name: String,
}

/// Object identifier within a record
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntity {
    /// Object key
    pub key: String,
}

/// Fixed acknowledgment returned to the notification service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerResponse {
    /// HTTP-style status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response body
    pub body: String,
}

impl TriggerResponse {
    /// The success acknowledgment, returned regardless of match count
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            body: "Glue Job Updated".to_string(),
        }
    }
}
