//! The flow store.
//!
//! [`FlowStore`] provides named CRUD-lite access over the flow collection,
//! backed by a single storage slot. Every operation performs one full
//! read-(modify-)write cycle of the slot; there is no batching and no
//! isolation against concurrent writers in other processes, so callers must
//! tolerate stale reads.

use crate::error::{FlowstashError, Result};
use crate::storage::{FileSlot, MemorySlot, StorageSlot};

use super::{codec, FlowCollection, FlowDocument};

/// Named flow persistence over a single storage slot.
pub struct FlowStore {
    slot: Box<dyn StorageSlot>,
}

impl FlowStore {
    /// The fixed slot key the entire collection is serialized under.
    pub const SLOT_KEY: &'static str = "flows";

    /// Create a store over the given slot.
    pub fn new(slot: Box<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// Open the store at the default persistent location (`~/.flowstash`).
    ///
    /// When no home directory can be discovered there is no persistent
    /// storage to use; the store degrades to an in-process slot, so reads
    /// see an empty collection rather than an error.
    pub fn open_default() -> Self {
        match FileSlot::discover() {
            Some(slot) => Self::new(Box::new(slot)),
            None => {
                tracing::warn!("no home directory found, flows will not persist");
                Self::new(Box::new(MemorySlot::new()))
            }
        }
    }

    /// Human-readable location of the backing slot.
    pub fn location(&self) -> String {
        self.slot.location()
    }

    /// Read the full collection.
    pub fn all(&self) -> Result<FlowCollection> {
        let raw = self.slot.read(Self::SLOT_KEY)?;
        codec::decode(raw.as_deref())
    }

    /// Insert or fully replace the flow stored under `name`.
    ///
    /// The document's embedded `name` must equal the key it is saved under;
    /// a mismatch fails with [`FlowstashError::NameMismatch`] instead of
    /// persisting a divergent entry.
    pub fn save(&self, name: &str, flow: FlowDocument) -> Result<()> {
        if flow.name != name {
            return Err(FlowstashError::NameMismatch {
                key: name.to_string(),
                name: flow.name,
            });
        }

        let mut collection = self.all()?;
        collection.insert(name.to_string(), flow);
        self.write(&collection)?;

        tracing::debug!(flow = name, "saved flow");
        Ok(())
    }

    /// Remove the flow stored under `name`.
    ///
    /// Returns whether an entry was removed. Idempotent: deleting an absent
    /// flow is a no-op that returns `Ok(false)`.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut collection = self.all()?;

        if collection.remove(name).is_none() {
            return Ok(false);
        }

        self.write(&collection)?;
        tracing::debug!(flow = name, "deleted flow");
        Ok(true)
    }

    /// Load the flow stored under `name`, or `None` if absent.
    pub fn load(&self, name: &str) -> Result<Option<FlowDocument>> {
        let collection = self.all()?;
        Ok(collection.get(name).cloned())
    }

    /// Remove the slot entirely, dropping every stored flow.
    pub fn clear(&self) -> Result<()> {
        self.slot.remove(Self::SLOT_KEY)?;
        tracing::debug!("cleared flow store");
        Ok(())
    }

    /// Encode and write the full collection back to the slot.
    fn write(&self, collection: &FlowCollection) -> Result<()> {
        let encoded = codec::encode(collection)?;
        self.slot.write(Self::SLOT_KEY, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{EdgeRecord, NodeRecord};
    use serde_json::json;

    fn memory_store() -> FlowStore {
        FlowStore::new(Box::new(MemorySlot::new()))
    }

    fn sample_flow(name: &str) -> FlowDocument {
        FlowDocument {
            name: name.into(),
            nodes: vec![NodeRecord(json!({"id": "1", "type": "email"}))],
            edges: vec![],
        }
    }

    #[test]
    fn all_on_empty_store_is_empty_mapping() {
        let store = memory_store();
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = memory_store();
        let flow = sample_flow("Q3 Outreach");

        store.save("Q3 Outreach", flow.clone()).unwrap();

        assert_eq!(store.load("Q3 Outreach").unwrap(), Some(flow));
    }

    #[test]
    fn load_unknown_flow_is_none() {
        let store = memory_store();
        assert!(store.load("never saved").unwrap().is_none());
    }

    #[test]
    fn save_replaces_prior_document_fully() {
        let store = memory_store();
        store.save("Drip", sample_flow("Drip")).unwrap();

        let replacement = FlowDocument {
            name: "Drip".into(),
            nodes: vec![
                NodeRecord(json!({"id": "a", "type": "email"})),
                NodeRecord(json!({"id": "b", "type": "wait"})),
            ],
            edges: vec![EdgeRecord(json!({"id": "e", "source": "a", "target": "b"}))],
        };
        store.save("Drip", replacement.clone()).unwrap();

        assert_eq!(store.load("Drip").unwrap(), Some(replacement));
    }

    #[test]
    fn save_rejects_mismatched_name() {
        let store = memory_store();
        let err = store
            .save("Q3 Outreach", sample_flow("Q4 Outreach"))
            .unwrap_err();

        assert!(matches!(err, FlowstashError::NameMismatch { .. }));
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn saved_key_and_embedded_name_agree() {
        let store = memory_store();
        store.save("Q3 Outreach", sample_flow("Q3 Outreach")).unwrap();

        let collection = store.all().unwrap();
        let (key, flow) = collection.iter().next().unwrap();
        assert_eq!(key, "Q3 Outreach");
        assert_eq!(flow.name, "Q3 Outreach");
    }

    #[test]
    fn delete_then_load_is_none() {
        let store = memory_store();
        store.save("Drip", sample_flow("Drip")).unwrap();

        assert!(store.delete("Drip").unwrap());
        assert!(store.load("Drip").unwrap().is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let store = memory_store();
        store.save("Drip", sample_flow("Drip")).unwrap();

        assert!(store.delete("Drip").unwrap());
        assert!(!store.delete("Drip").unwrap());
        assert!(!store.delete("Drip").unwrap());
    }

    #[test]
    fn delete_keeps_other_flows() {
        let store = memory_store();
        store.save("A", sample_flow("A")).unwrap();
        store.save("B", sample_flow("B")).unwrap();

        store.delete("A").unwrap();

        let collection = store.all().unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.contains_key("B"));
    }

    #[test]
    fn clear_drops_all_flows() {
        let store = memory_store();
        store.save("A", sample_flow("A")).unwrap();
        store.save("B", sample_flow("B")).unwrap();

        store.clear().unwrap();

        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_fails_every_operation() {
        let slot = MemorySlot::with_entry(FlowStore::SLOT_KEY, "{\"truncated\"");
        let store = FlowStore::new(Box::new(slot));

        assert!(matches!(
            store.all().unwrap_err(),
            FlowstashError::CorruptStore { .. }
        ));
        assert!(matches!(
            store.load("any").unwrap_err(),
            FlowstashError::CorruptStore { .. }
        ));
        assert!(matches!(
            store.save("any", sample_flow("any")).unwrap_err(),
            FlowstashError::CorruptStore { .. }
        ));
        assert!(matches!(
            store.delete("any").unwrap_err(),
            FlowstashError::CorruptStore { .. }
        ));
    }

    #[test]
    fn corrupt_blob_is_not_overwritten_by_failed_save() {
        let slot = MemorySlot::with_entry(FlowStore::SLOT_KEY, "{\"truncated\"");
        let store = FlowStore::new(Box::new(slot));

        let _ = store.save("any", sample_flow("any"));

        let raw = store.slot.read(FlowStore::SLOT_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some("{\"truncated\""));
    }
}
