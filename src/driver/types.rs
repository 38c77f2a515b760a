//! Driver types

/// One conversion unit of work
///
/// Derived per listed object; lives only for the duration of that object's
/// read-convert-write cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    /// Source container
    pub input_container: String,
    /// Source object key
    pub input_key: String,
    /// Destination container
    pub output_container: String,
    /// Destination object key
    pub output_key: String,
}

/// One object that failed conversion or upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedObject {
    /// Key of the offending source object
    pub key: String,
    /// Rendered error
    pub error: String,
}

/// Outcome of one batch run
///
/// Per-object failures never halt the batch; they are aggregated here so
/// callers can inspect them programmatically instead of scraping logs.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// Input keys converted and written successfully
    pub succeeded: Vec<String>,
    /// Objects that failed to read, parse, or write
    pub failed: Vec<FailedObject>,
    /// Objects skipped by classification (markers, wrong extension)
    pub skipped: usize,
}

impl ConversionReport {
    /// Whether every classified object converted successfully
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of objects examined
    #[must_use]
    pub fn total_listed(&self) -> usize {
        self.succeeded.len() + self.failed.len() + self.skipped
    }
}
