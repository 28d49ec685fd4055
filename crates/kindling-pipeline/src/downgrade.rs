//! Citation downgrader
//!
//! A resolved document embedded as the target of a reference property is
//! cited material, not a duplicate standalone item. Embedding a full entry
//! would duplicate semantics and break type-based rendering downstream, so
//! entries are rewritten to citations before re-encoding.

use kindling_core::{Jf2Document, TYPE_CITE, TYPE_ENTRY};

/// Downgrade a full entry to a citation; all other types pass unchanged.
pub fn downgrade_to_cite(mut doc: Jf2Document) -> Jf2Document {
    if doc.doc_type() == Some(TYPE_ENTRY) {
        doc.set_type(TYPE_CITE);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_becomes_cite() {
        let doc = Jf2Document::from_value(json!({"type": "entry", "name": "Post"})).unwrap();
        let doc = downgrade_to_cite(doc);
        assert_eq!(doc.doc_type(), Some("cite"));
        assert_eq!(doc.name(), Some("Post"));
    }

    #[test]
    fn test_other_types_pass_through() {
        for doc_type in ["cite", "card", "event", "video"] {
            let doc = Jf2Document::of_type(doc_type);
            assert_eq!(downgrade_to_cite(doc).doc_type(), Some(doc_type));
        }
    }

    #[test]
    fn test_untyped_document_is_untouched() {
        let doc = Jf2Document::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(downgrade_to_cite(doc).doc_type(), None);
    }
}
