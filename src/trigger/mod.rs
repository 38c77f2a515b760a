//! Script-upload trigger
//!
//! # Overview
//!
//! Companion to the batch driver: when the job's own source script is
//! re-uploaded to storage, a change notification fires and this handler
//! repoints the managed job at the new script location. The job-management
//! API itself is an external collaborator behind the [`JobScriptUpdater`]
//! trait.

mod handler;
mod types;

pub use handler::{JobScriptUpdater, ScriptUploadHandler};
pub use types::{
    BucketEntity, EventNotification, EventRecord, ObjectEntity, StorageEntity, TriggerResponse,
};

#[cfg(test)]
mod tests;
