//! This module contains the ABI cache used by the contract caller.

pub mod error;
pub mod sqlite;
pub use sqlite::SqliteAbiStore;
pub mod traits;
