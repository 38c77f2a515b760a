//! # parqshift
//!
//! Batch CSV to Parquet conversion over object storage.
//!
//! parqshift discovers CSV objects under an inbound storage prefix,
//! converts each to a columnar Parquet file, and writes the result under an
//! outbound prefix. A companion trigger repoints the managed ETL job at its
//! script whenever the script is re-uploaded.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parqshift::{ConversionDriver, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let driver = ConversionDriver::from_uris(
//!         "s3://data/inbound",
//!         "s3://data/outbound",
//!     )?;
//!
//!     let report = driver.run().await?;
//!     println!("{} converted, {} failed", report.succeeded.len(), report.failed.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     ConversionDriver                       │
//! │  split paths → list inputs → classify → convert → write    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬──────────────┬─┴──────────────┬────────────────┐
//! │   path    │    store     │    convert     │    trigger     │
//! ├───────────┼──────────────┼────────────────┼────────────────┤
//! │ URI split │ paged list   │ CSV inference  │ script upload  │
//! │ key map   │ read / write │ Parquet buffer │ job repoint    │
//! └───────────┴──────────────┴────────────────┴────────────────┘
//! ```
//!
//! One bad file never halts the batch: per-object failures are aggregated
//! into a [`ConversionReport`] while the run itself completes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Storage URI splitting and key mapping
pub mod path;

/// Object storage access
pub mod store;

/// CSV to Parquet conversion
pub mod convert;

/// Batch orchestration
pub mod driver;

/// Script-upload trigger
pub mod trigger;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use convert::RecordConverter;
pub use driver::{ConversionDriver, ConversionReport, FailedObject};
pub use error::{Error, Result};
pub use path::{map_output_key, normalize_prefix, split_storage_uri, StoragePath};
pub use store::{ObjectEntry, StorageLocation};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
