//! Script-upload handling

use super::types::{EventNotification, TriggerResponse};
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Boundary to the external job-management API
///
/// The production implementation calls the managed ETL service; tests
/// substitute a recording implementation.
#[async_trait]
pub trait JobScriptUpdater: Send + Sync {
    /// Point the named job at a new script location
    async fn update_script_location(&self, job_name: &str, location: &str) -> Result<()>;
}

/// Maps script-upload notifications to job updates
#[derive(Debug, Clone)]
pub struct ScriptUploadHandler {
    /// Name of the managed job to update
    job_name: String,
    /// Substring identifying the job's script among uploaded keys
    script_marker: String,
}

impl ScriptUploadHandler {
    /// Create a handler for one job and its script path marker
    pub fn new(job_name: impl Into<String>, script_marker: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            script_marker: script_marker.into(),
        }
    }

    /// Process one notification batch
    ///
    /// Every record whose key contains the script marker triggers one job
    /// update with the rebuilt `s3://{bucket}/{key}` location. The fixed
    /// success acknowledgment is returned however many records matched,
    /// including zero. Updater failures propagate.
    pub async fn handle(
        &self,
        event: &EventNotification,
        updater: &dyn JobScriptUpdater,
    ) -> Result<TriggerResponse> {
        for record in &event.records {
            let key = &record.s3.object.key;
            if !key.contains(&self.script_marker) {
                continue;
            }

            let location = format!("s3://{}/{}", record.s3.bucket.name, key);
            updater
                .update_script_location(&self.job_name, &location)
                .await?;
            info!(job = %self.job_name, %location, "Updated job script location");
        }

        Ok(TriggerResponse::ok())
    }
}
