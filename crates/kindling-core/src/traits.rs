//! Classification collaborator traits
//!
//! The pipeline's kind-classification glue consumes these two seams after
//! reference resolution: a [`KindClassifier`] infers a kind slug from the
//! citation-enriched property bag, and a [`KindTaxonomy`] supplies per-kind
//! display metadata. Both are injected so tests can substitute doubles.

use serde::{Deserialize, Serialize};

use crate::properties::PropertyBag;

/// Display format associated with a kind when the item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostFormat {
    Standard,
    Aside,
    Link,
    Image,
    Video,
    Audio,
    Status,
}

/// Per-kind display metadata supplied by the taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindInfo {
    /// Translated display string, e.g. "Bookmark"
    pub display_string: String,
    /// Verb prefix shown before the cited content, e.g. "Bookmarked "
    pub prefix_text: String,
    /// Display format applied to the stored item
    pub display_format: PostFormat,
    /// Single-character short-link type prefix
    pub shortlink_prefix: char,
}

/// Infers a kind slug from a classified property bag.
///
/// Called on the bag *after* reference resolution, so classification can see
/// enriched citation data. Returns `None` when no kind can be inferred.
pub trait KindClassifier: Send + Sync {
    /// Infer the item's kind slug, e.g. `"bookmark"`.
    fn infer_kind(&self, bag: &PropertyBag) -> Option<String>;
}

/// Looks up per-kind metadata.
pub trait KindTaxonomy: Send + Sync {
    /// Metadata for a kind slug, or `None` for an unknown slug.
    fn lookup(&self, kind_slug: &str) -> Option<KindInfo>;
}
