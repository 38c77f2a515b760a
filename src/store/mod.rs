//! Object storage access
//!
//! # Overview
//!
//! The store module wraps the storage service boundary behind
//! [`StorageLocation`], an explicitly constructed client covering the three
//! operations the conversion pipeline needs: paged listing, single-object
//! read, and single-object write. Tests substitute an in-memory store via
//! [`StorageLocation::with_store`].

mod location;

pub use location::{ObjectEntry, StorageLocation};

#[cfg(test)]
mod tests;
