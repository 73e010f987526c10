//! Rating storage for toque.
//!
//! This module provides persistent storage for initial ratings and user
//! rating events, supporting file-based and in-memory backends.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::{FileRatingStore, RatingRecord, RatingRecordKind, RATING_SCHEMA_VERSION};
pub use memory::MemoryRatingStore;
pub use traits::RatingStore;
