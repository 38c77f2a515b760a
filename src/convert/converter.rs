//! Row-oriented to columnar conversion

use super::writer::{ParquetBufferWriter, ParquetWriterConfig};
use crate::error::{Error, Result};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use std::io::Cursor;
use std::sync::Arc;

/// Converts one CSV byte stream into one Parquet buffer
///
/// Column types are inferred from the data: numeric columns become numeric
/// Arrow types, everything else becomes text. The inference is delegated to
/// the Arrow CSV reader and is not configurable beyond the delimiter and
/// header flags. No row index column is emitted.
#[derive(Debug, Clone)]
pub struct RecordConverter {
    /// Field delimiter
    delimiter: u8,
    /// Whether the first row is a header
    has_header: bool,
    /// Rows per decoded RecordBatch
    batch_size: usize,
    /// Parquet serialization settings
    writer_config: ParquetWriterConfig,
}

impl Default for RecordConverter {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            batch_size: 8192,
            writer_config: ParquetWriterConfig::default(),
        }
    }
}

impl RecordConverter {
    /// Create a converter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom delimiter and header handling
    pub fn with_options(delimiter: u8, has_header: bool) -> Self {
        Self {
            delimiter,
            has_header,
            ..Self::default()
        }
    }

    /// Set the Parquet serialization settings
    #[must_use]
    pub fn with_writer_config(mut self, config: ParquetWriterConfig) -> Self {
        self.writer_config = config;
        self
    }

    /// Convert CSV bytes into a Parquet buffer
    ///
    /// The full table is materialized in memory between read and write.
    /// Malformed input (ragged rows, unterminated quotes, invalid UTF-8)
    /// fails with `Error::Parse`; the caller decides whether that aborts
    /// anything beyond this one object.
    pub fn convert(&self, data: &[u8]) -> Result<Vec<u8>> {
        let format = Format::default()
            .with_header(self.has_header)
            .with_delimiter(self.delimiter);

        // Schema inference reads the whole input once, then the reader
        // decodes it again from the start.
        let mut cursor = Cursor::new(data);
        let (schema, _) = format
            .infer_schema(&mut cursor, None)
            .map_err(|e| Error::parse(e.to_string()))?;
        cursor.set_position(0);

        let schema = Arc::new(schema);
        let reader = ReaderBuilder::new(Arc::clone(&schema))
            .with_format(format)
            .with_batch_size(self.batch_size)
            .build(cursor)
            .map_err(|e| Error::parse(e.to_string()))?;

        let mut writer = ParquetBufferWriter::new(schema, &self.writer_config)?;
        for batch in reader {
            let batch = batch.map_err(|e| Error::parse(e.to_string()))?;
            writer.write(&batch)?;
        }

        writer.into_bytes()
    }
}
