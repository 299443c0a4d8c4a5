//! Storage slots.
//!
//! This module provides:
//! - [`StorageSlot`] trait, the capability interface the flow store writes
//!   through
//! - [`FileSlot`] for persistent on-disk storage
//! - [`MemorySlot`] for tests and environments without a persistent location
//!
//! A slot is a flat key → string mapping. The flow store uses exactly one
//! key, so a slot backend only needs to round-trip whole text blobs.

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::Result;

/// A single key-value storage location.
///
/// This trait allows substituting an in-memory fake in tests and degrading
/// gracefully when no persistent location exists.
pub trait StorageSlot {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. No-op if absent.
    fn remove(&self, key: &str) -> Result<()>;

    /// Human-readable location for log and error messages.
    fn location(&self) -> String;
}
