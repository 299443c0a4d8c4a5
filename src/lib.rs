//! Flowstash - local store for campaign sequence flows.
//!
//! Flowstash persists the named node/edge graphs ("flows") authored in a
//! campaign builder. The entire collection is serialized as one JSON blob in
//! a single storage slot, with a small CLI over the usual operations.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`flow`] - Flow documents, the collection codec, and the store
//! - [`storage`] - Storage slots (file-backed and in-memory)
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use flowstash::flow::{FlowDocument, FlowStore};
//! use flowstash::storage::MemorySlot;
//!
//! let store = FlowStore::new(Box::new(MemorySlot::new()));
//! store.save("Q3 Outreach", FlowDocument::new("Q3 Outreach")).unwrap();
//!
//! let flows = store.all().unwrap();
//! assert_eq!(flows.len(), 1);
//! ```

pub mod cli;
pub mod error;
pub mod flow;
pub mod storage;
pub mod ui;

pub use error::{FlowstashError, Result};
pub use flow::{FlowCollection, FlowDocument, FlowStore};
