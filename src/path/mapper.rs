//! Input key to output key mapping

/// Recognized source file extension (matched case-insensitively)
pub const SOURCE_EXTENSION: &str = ".csv";

/// Extension of produced columnar files
pub const OUTPUT_EXTENSION: &str = ".parquet";

/// Derive the output key for a listed object, or `None` to skip it
///
/// Skips the directory-marker object (key equal to `in_prefix`) and any key
/// whose lowercased form does not end in [`SOURCE_EXTENSION`]. For
/// convertible keys, only the base file name is carried over to the output
/// prefix; directory structure beneath `in_prefix` is intentionally
/// flattened. Pure and total: this function classifies, it never fails.
///
/// Both prefixes are expected in normalized form
/// (see [`normalize_prefix`](super::normalize_prefix)).
pub fn map_output_key(entry_key: &str, in_prefix: &str, out_prefix: &str) -> Option<String> {
    if entry_key == in_prefix {
        return None;
    }

    if !entry_key.to_lowercase().ends_with(SOURCE_EXTENSION) {
        return None;
    }

    let relative = entry_key.strip_prefix(in_prefix).unwrap_or(entry_key);
    let file_name = relative.rsplit('/').next().unwrap_or(relative);
    let stem = &file_name[..file_name.len() - SOURCE_EXTENSION.len()];

    Some(format!("{out_prefix}{stem}{OUTPUT_EXTENSION}"))
}
