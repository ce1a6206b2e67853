//! Key-value storage
//!
//! The board persists into a flat string-keyed, string-valued store,
//! the same shape as a browser's local storage.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use crate::Result;

/// A string key-value store holding serialized board state
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`, returning whether one existed
    fn remove(&mut self, key: &str) -> Result<bool>;
}
