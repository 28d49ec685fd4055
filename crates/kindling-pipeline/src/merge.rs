//! Re-encoder & merger
//!
//! Converts a resolved (already downgraded) document into the bag's native
//! mf2 encoding and writes it back at the task's original position. The merge
//! policy depends on the original shape:
//!
//! - sequence element: replaced outright; the fetched, classified data is
//!   authoritative for that slot
//! - single structured value: shallow-merged in flat space before encoding,
//!   so caller-supplied sibling fields (a quoted excerpt, a note) survive
//!   inside the citation while freshly resolved fields win on conflict
//! - bare scalar URL: replaced with the encoded document
//!
//! Cardinality is preserved: only element content changes.

use serde_json::Value;

use kindling_core::{Jf2Document, PropertyBag, ResolutionTask};
use kindling_mf2::CodecResult;

/// Merge one resolved document into the bag at its task's position.
///
/// Encoding failure leaves the bag untouched and surfaces as a `CodecError`
/// for the orchestrator to record; it never panics and never partially
/// writes.
pub fn apply_resolved(
    bag: &mut PropertyBag,
    task: &ResolutionTask,
    doc: &Jf2Document,
) -> CodecResult<()> {
    let Some(slot) = bag.get_mut(&task.property) else {
        // Detector and merger run on the same bag within one call; a missing
        // property means the task is stale and there is nothing to write.
        return Ok(());
    };

    match task.index {
        Some(index) => {
            let encoded = kindling_mf2::encode(doc)?;
            if let Value::Array(elements) = slot {
                if let Some(element) = elements.get_mut(index) {
                    *element = encoded;
                }
            }
        }
        None => {
            let replacement = match slot {
                Value::Object(original) => {
                    let mut merged = original.clone();
                    for (key, value) in doc.iter() {
                        merged.insert(key.clone(), value.clone());
                    }
                    kindling_mf2::encode(&Jf2Document::from(merged))?
                }
                _ => kindling_mf2::encode(doc)?,
            };
            *slot = replacement;
        }
    }
    Ok(())
}
