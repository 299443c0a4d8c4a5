//! Collection codec.
//!
//! Converts between the in-memory [`FlowCollection`] and its persisted text
//! form. An absent blob decodes to an empty mapping; a present blob that
//! fails to parse is surfaced as [`FlowstashError::CorruptStore`], never
//! healed to an empty mapping.

use crate::error::{FlowstashError, Result};

use super::FlowCollection;

/// Decode a persisted blob into a collection.
pub fn decode(raw: Option<&str>) -> Result<FlowCollection> {
    match raw {
        None => Ok(FlowCollection::new()),
        Some(text) => {
            serde_json::from_str(text).map_err(|e| FlowstashError::CorruptStore {
                message: e.to_string(),
            })
        }
    }
}

/// Encode a collection into its persisted text form.
///
/// Round-trips exactly with [`decode`].
pub fn encode(collection: &FlowCollection) -> Result<String> {
    serde_json::to_string_pretty(collection).map_err(|e| FlowstashError::CorruptStore {
        message: format!("Failed to serialize collection: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{EdgeRecord, FlowDocument, NodeRecord};
    use serde_json::json;

    fn sample_collection() -> FlowCollection {
        let mut collection = FlowCollection::new();
        collection.insert(
            "Q3 Outreach".to_string(),
            FlowDocument {
                name: "Q3 Outreach".into(),
                nodes: vec![
                    NodeRecord(json!({"id": "1", "type": "email"})),
                    NodeRecord(json!({"id": "2", "type": "wait", "days": 3})),
                ],
                edges: vec![EdgeRecord(json!({"id": "e1", "source": "1", "target": "2"}))],
            },
        );
        collection.insert("Empty".to_string(), FlowDocument::new("Empty"));
        collection
    }

    #[test]
    fn decode_absent_blob_is_empty_mapping() {
        let collection = decode(None).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn decode_empty_object_is_empty_mapping() {
        let collection = decode(Some("{}")).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn encode_decode_round_trips() {
        let collection = sample_collection();
        let encoded = encode(&collection).unwrap();
        let decoded = decode(Some(&encoded)).unwrap();

        assert_eq!(decoded, collection);
    }

    #[test]
    fn decode_truncated_text_is_corrupt_store() {
        let err = decode(Some("{\"Q3 Outreach\": {\"name\"")).unwrap_err();
        assert!(matches!(err, FlowstashError::CorruptStore { .. }));
    }

    #[test]
    fn decode_wrong_shape_is_corrupt_store() {
        let err = decode(Some("[1, 2, 3]")).unwrap_err();
        assert!(matches!(err, FlowstashError::CorruptStore { .. }));
    }

    #[test]
    fn encode_is_deterministic() {
        let collection = sample_collection();
        assert_eq!(encode(&collection).unwrap(), encode(&collection).unwrap());
    }
}
