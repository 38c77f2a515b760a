//! Batch conversion driver
//!
//! # Overview
//!
//! `ConversionDriver` orchestrates one single-threaded, strictly sequential
//! pass: list every object under the inbound prefix, classify each key,
//! convert the convertible ones, and write the results under the outbound
//! prefix. There is no retry state and no checkpoint; one bad file never
//! halts the batch, while startup and listing errors abort the whole run.

mod types;

pub use types::{ConversionReport, ConversionTask, FailedObject};

use crate::convert::RecordConverter;
use crate::error::Result;
use crate::path::map_output_key;
use crate::store::StorageLocation;
use bytes::Bytes;
use tracing::{debug, error, info};

/// Sequential CSV-to-Parquet batch driver
pub struct ConversionDriver {
    /// Source container + prefix
    input: StorageLocation,
    /// Destination container + prefix
    output: StorageLocation,
    /// The CSV-to-Parquet converter
    converter: RecordConverter,
}

impl ConversionDriver {
    /// Create a driver over pre-built storage locations
    pub fn new(input: StorageLocation, output: StorageLocation) -> Self {
        Self {
            input,
            output,
            converter: RecordConverter::new(),
        }
    }

    /// Create a driver from the two configured storage URIs
    pub fn from_uris(inbound_path: &str, outbound_path: &str) -> Result<Self> {
        let input = StorageLocation::parse(inbound_path)?;
        let output = StorageLocation::parse(outbound_path)?;
        Ok(Self::new(input, output))
    }

    /// Replace the converter
    #[must_use]
    pub fn with_converter(mut self, converter: RecordConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Run the batch to completion
    ///
    /// Listing failures propagate (no partial object list is acted on).
    /// Per-object failures are logged with the offending key, recorded in
    /// the report, and the loop continues. The run itself succeeds
    /// regardless of how many individual objects failed.
    pub async fn run(&self) -> Result<ConversionReport> {
        let in_prefix = self.input.prefix();
        let out_prefix = self.output.prefix();

        info!(
            input_container = %self.input.container(),
            input_prefix = %in_prefix,
            output_container = %self.output.container(),
            output_prefix = %out_prefix,
            "Starting batch conversion"
        );

        let entries = self.input.list().await?;
        info!(count = entries.len(), "Listed input objects");

        let mut report = ConversionReport::default();

        for entry in entries {
            let Some(output_key) = map_output_key(&entry.key, &in_prefix, &out_prefix) else {
                debug!(key = %entry.key, "Skipping non-convertible object");
                report.skipped += 1;
                continue;
            };

            let task = ConversionTask {
                input_container: self.input.container().to_string(),
                input_key: entry.key,
                output_container: self.output.container().to_string(),
                output_key,
            };

            match self.process(&task).await {
                Ok(bytes) => {
                    info!(
                        key = %task.input_key,
                        output = %task.output_key,
                        bytes,
                        "Converted object"
                    );
                    report.succeeded.push(task.input_key);
                }
                Err(e) => {
                    error!(key = %task.input_key, error = %e, "Failed to convert object");
                    report.failed.push(FailedObject {
                        key: task.input_key,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            skipped = report.skipped,
            "Batch conversion completed"
        );

        Ok(report)
    }

    /// Read, convert, and write one object
    async fn process(&self, task: &ConversionTask) -> Result<usize> {
        let source = self.input.read(&task.input_key).await?;
        let buffer = self.converter.convert(&source)?;
        let size = buffer.len();
        self.output
            .write(&task.output_key, Bytes::from(buffer))
            .await?;
        Ok(size)
    }
}
