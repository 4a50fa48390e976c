//! Local persistence standing in for browser storage.
//!
//! Every collection lives under a typed [`StoreKey`] and is read and written as one JSON
//! document: read whole → compute new value → write whole. There is no partial update,
//! indexing or cross-process locking; the last writer wins.
//!
//! Documents live in the data directory as `<key>.json`:
//! - `savedProperties.json`
//! - `propertyInquiries.json`
//! - `userProperties.json`
//! - `userPreferences.json`

pub mod backend;
pub mod keys;
pub mod repository;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use keys::{INQUIRIES, PREFERENCES, SAVED_PROPERTIES, StoreKey, USER_LISTINGS};
pub use repository::Repository;
