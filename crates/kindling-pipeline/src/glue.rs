//! Kind classification glue
//!
//! Thin pass-through that runs after reference resolution: the
//! citation-enriched bag goes to the injected classifier for a kind slug, and
//! the taxonomy supplies that kind's display metadata for application to the
//! stored item. No resolution logic lives here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use kindling_core::{KindClassifier, KindInfo, KindTaxonomy, PropertyBag};

/// An inferred kind together with its taxonomy metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindApplication {
    /// The inferred kind slug, e.g. `"bookmark"`
    pub kind: String,
    /// Display metadata, absent when the taxonomy does not know the slug
    pub info: Option<KindInfo>,
}

/// Classify an item's bag and look up the kind's metadata.
///
/// Call this on the bag *after* [`crate::Pipeline::process`] so classification
/// sees enriched citation data. Returns `None` when no kind can be inferred.
pub fn classify_item(
    bag: &PropertyBag,
    classifier: &dyn KindClassifier,
    taxonomy: &dyn KindTaxonomy,
) -> Option<KindApplication> {
    let kind = classifier.infer_kind(bag)?;
    let info = taxonomy.lookup(&kind);
    if info.is_none() {
        debug!(kind = %kind, "no taxonomy metadata for inferred kind");
    }
    Some(KindApplication { kind, info })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedClassifier(Option<&'static str>);

    impl KindClassifier for FixedClassifier {
        fn infer_kind(&self, _bag: &PropertyBag) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    struct EmptyTaxonomy;

    impl KindTaxonomy for EmptyTaxonomy {
        fn lookup(&self, _kind_slug: &str) -> Option<KindInfo> {
            None
        }
    }

    #[test]
    fn test_unclassifiable_bag_yields_none() {
        let bag = PropertyBag::from_value(json!({"content": ["x"]})).unwrap();
        assert_eq!(
            classify_item(&bag, &FixedClassifier(None), &EmptyTaxonomy),
            None
        );
    }

    #[test]
    fn test_unknown_slug_still_returns_the_kind() {
        let bag = PropertyBag::from_value(json!({"content": ["x"]})).unwrap();
        let applied = classify_item(&bag, &FixedClassifier(Some("exotic")), &EmptyTaxonomy)
            .unwrap();
        assert_eq!(applied.kind, "exotic");
        assert!(applied.info.is_none());
    }
}
