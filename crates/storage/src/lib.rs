//! Storage access for the climate services.
//!
//! Provides a read-only view over the two-table observation dataset:
//! - `station`: site metadata
//! - `measurement`: daily precipitation and temperature per station

pub mod error;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::ClimateStore;
