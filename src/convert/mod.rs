//! CSV to Parquet conversion
//!
//! # Overview
//!
//! The convert module turns one row-oriented CSV byte stream into one
//! self-describing Parquet buffer:
//! - `RecordConverter` - parses delimited text, infers column types, and
//!   serializes the resulting record batches
//! - `ParquetBufferWriter` - Arrow-to-Parquet serialization into memory
//!
//! The whole table is materialized before serialization; memory usage is
//! bounded by the largest single source file.

mod converter;
mod writer;

pub use converter::RecordConverter;
pub use writer::{ParquetBufferWriter, ParquetWriterConfig};
