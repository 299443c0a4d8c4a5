//! Flow documents and the collection mapping.
//!
//! A flow is a named campaign-sequence graph authored in the campaign
//! builder. The builder owns the shape of its node and edge records; this
//! crate treats them as opaque JSON and guarantees round-trip serialization
//! only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The full mapping of flow name → document, as persisted in one slot.
///
/// A `BTreeMap` keeps the encoded blob deterministic across saves.
pub type FlowCollection = BTreeMap<String, FlowDocument>;

/// A named campaign-sequence graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    /// Flow name, unique within the store and equal to its lookup key.
    pub name: String,

    /// Ordered node records, shape owned by the builder UI.
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,

    /// Ordered edge records, shape owned by the builder UI.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl FlowDocument {
    /// Create an empty flow with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// An opaque node record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRecord(pub Value);

/// An opaque edge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeRecord(pub Value);

impl NodeRecord {
    /// The record's `id` field, when the builder supplied one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }
}

impl EdgeRecord {
    /// The record's `id` field, when the builder supplied one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }
}
