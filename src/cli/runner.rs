//! CLI runner - executes the batch

use crate::cli::commands::Cli;
use crate::driver::{ConversionDriver, ConversionReport};
use crate::error::Result;
use tracing::warn;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the batch conversion
    ///
    /// Per-object failures are summarized on stderr via logs but do not
    /// fail the run; only startup and listing errors return `Err`.
    pub async fn run(&self) -> Result<ConversionReport> {
        let driver = ConversionDriver::from_uris(&self.cli.inbound_path, &self.cli.outbound_path)?;
        let report = driver.run().await?;

        println!(
            "Converted {} object(s), {} failed, {} skipped",
            report.succeeded.len(),
            report.failed.len(),
            report.skipped
        );

        for failed in &report.failed {
            warn!(key = %failed.key, error = %failed.error, "Object was not converted");
        }

        Ok(report)
    }
}
