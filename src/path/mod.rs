//! Storage path handling
//!
//! # Overview
//!
//! The path module provides:
//! - `StoragePath` - a parsed container + key-prefix pair
//! - `split_storage_uri` - `s3://bucket/prefix` parsing
//! - `normalize_prefix` - trailing-separator normalization
//! - `map_output_key` - input key to output key classification

mod mapper;
mod splitter;
mod types;

pub use mapper::{map_output_key, OUTPUT_EXTENSION, SOURCE_EXTENSION};
pub use splitter::{normalize_prefix, split_storage_uri};
pub use types::StoragePath;
