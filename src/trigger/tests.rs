//! Tests for the trigger module

use super::*;
use crate::error::Result;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Mutex;

/// Records update calls instead of talking to a job-management API
#[derive(Default)]
struct RecordingUpdater {
    calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl JobScriptUpdater for RecordingUpdater {
    async fn update_script_location(&self, job_name: &str, location: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((job_name.to_string(), location.to_string()));
        Ok(())
    }
}

struct FailingUpdater;

#[async_trait]
impl JobScriptUpdater for FailingUpdater {
    async fn update_script_location(&self, _job_name: &str, _location: &str) -> Result<()> {
        Err(crate::error::Error::job_update("access denied"))
    }
}

fn event(keys: &[&str]) -> EventNotification {
    let records = keys
        .iter()
        .map(|key| {
            serde_json::json!({
                "s3": {
                    "bucket": { "name": "scripts-bucket" },
                    "object": { "key": key }
                }
            })
        })
        .collect::<Vec<_>>();
    serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
}

// ============================================================================
// Handler Tests
// ============================================================================

#[tokio::test]
async fn test_matching_record_updates_job() {
    let handler = ScriptUploadHandler::new("CsvToParquetJob", "csv_to_parquet_job.py");
    let updater = RecordingUpdater::default();

    let response = handler
        .handle(&event(&["deploy/csv_to_parquet_job.py"]), &updater)
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    let calls = updater.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "CsvToParquetJob");
    assert_eq!(calls[0].1, "s3://scripts-bucket/deploy/csv_to_parquet_job.py");
}

#[tokio::test]
async fn test_zero_matches_still_returns_200() {
    let handler = ScriptUploadHandler::new("CsvToParquetJob", "csv_to_parquet_job.py");
    let updater = RecordingUpdater::default();

    let response = handler
        .handle(&event(&["deploy/unrelated.txt"]), &updater)
        .await
        .unwrap();

    assert_eq!(response, TriggerResponse::ok());
    assert!(updater.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_batch_returns_200() {
    let handler = ScriptUploadHandler::new("CsvToParquetJob", "csv_to_parquet_job.py");
    let updater = RecordingUpdater::default();

    let response = handler.handle(&event(&[]), &updater).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "Glue Job Updated");
}

#[tokio::test]
async fn test_updater_failure_propagates() {
    let handler = ScriptUploadHandler::new("CsvToParquetJob", "csv_to_parquet_job.py");

    let result = handler
        .handle(&event(&["deploy/csv_to_parquet_job.py"]), &FailingUpdater)
        .await;

    assert!(result.is_err());
}

// ============================================================================
// Type Tests
// ============================================================================

#[test]
fn test_event_notification_deserializes_storage_json() {
    let body = r#"{
        "Records": [
            {
                "s3": {
                    "bucket": { "name": "my-bucket" },
                    "object": { "key": "deploy/job.py" }
                }
            }
        ]
    }"#;

    let event: EventNotification = serde_json::from_str(body).unwrap();
    assert_eq!(event.records.len(), 1);
    assert_eq!(event.records[0].s3.bucket.name, "my-bucket");
    assert_eq!(event.records[0].s3.object.key, "deploy/job.py");
}

#[test]
fn test_event_notification_without_records() {
    let event: EventNotification = serde_json::from_str("{}").unwrap();
    assert!(event.records.is_empty());
}

#[test]
fn test_response_serializes_status_code_field() {
    let json = serde_json::to_value(TriggerResponse::ok()).unwrap();
    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["body"], "Glue Job Updated");
}
