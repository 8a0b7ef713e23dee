//! Durable local key-value storage port
//!
//! Synchronous by contract: preference updates are persisted before the
//! update call returns.

use crate::error::PersistenceError;

/// Well-known key holding the serialized preference profile
pub const PREFERENCES_KEY: &str = "digestSettings";

/// String-valued key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written or was cleared
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}
