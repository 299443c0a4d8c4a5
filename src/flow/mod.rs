//! Flow persistence.
//!
//! This module provides:
//! - [`FlowDocument`], [`NodeRecord`], [`EdgeRecord`] - the data model
//! - [`FlowCollection`] - the full name → document mapping
//! - [`codec`] - conversion between the collection and its persisted text
//! - [`FlowStore`] - named CRUD-lite access over a storage slot
//!
//! # Example
//!
//! ```
//! use flowstash::flow::{FlowDocument, FlowStore};
//! use flowstash::storage::MemorySlot;
//!
//! let store = FlowStore::new(Box::new(MemorySlot::new()));
//! store.save("Q3 Outreach", FlowDocument::new("Q3 Outreach")).unwrap();
//! assert!(store.load("Q3 Outreach").unwrap().is_some());
//! ```

pub mod codec;
pub mod document;
pub mod store;

pub use document::{EdgeRecord, FlowCollection, FlowDocument, NodeRecord};
pub use store::FlowStore;
