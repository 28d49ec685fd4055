//! Post type discovery
//!
//! Implements the Post Type Discovery algorithm
//! (<https://www.w3.org/TR/post-type-discovery/>) over a [`PropertyBag`],
//! extended with the read/listen/watch/favorite reference properties and the
//! checkin property. Property checks run in priority order; the first match
//! wins, falling back to the article-versus-note name heuristic.

use serde_json::Value;

use kindling_core::{KindClassifier, PropertyBag};

use crate::kind::Kind;

/// Property-to-kind table, checked in order. `rsvp` is special-cased because
/// only a constrained value set counts.
const PROPERTY_KINDS: [(&str, Kind); 12] = [
    ("repost-of", Kind::Repost),
    ("like-of", Kind::Like),
    ("favorite-of", Kind::Favorite),
    ("in-reply-to", Kind::Reply),
    ("bookmark-of", Kind::Bookmark),
    ("read-of", Kind::Read),
    ("listen-of", Kind::Listen),
    ("watch-of", Kind::Watch),
    ("checkin", Kind::Checkin),
    ("video", Kind::Video),
    ("audio", Kind::Audio),
    ("photo", Kind::Photo),
];

/// Classifier implementing post type discovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostTypeDiscovery;

impl PostTypeDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Discover the kind of a property bag.
    pub fn discover(&self, bag: &PropertyBag) -> Kind {
        if bag
            .get("rsvp")
            .map(first_value)
            .and_then(Value::as_str)
            .is_some_and(is_rsvp_value)
        {
            return Kind::Rsvp;
        }

        for (property, kind) in PROPERTY_KINDS {
            if bag.get(property).is_some_and(has_content) {
                return kind;
            }
        }

        match explicit_name(bag) {
            Some(_) => Kind::Article,
            None => Kind::Note,
        }
    }
}

impl KindClassifier for PostTypeDiscovery {
    fn infer_kind(&self, bag: &PropertyBag) -> Option<String> {
        Some(self.discover(bag).as_slug().to_string())
    }
}

fn is_rsvp_value(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "yes" | "no" | "maybe" | "interested"
    )
}

/// First element of a sequence value, or the value itself.
fn first_value(value: &Value) -> &Value {
    match value {
        Value::Array(elements) => elements.first().unwrap_or(value),
        other => other,
    }
}

/// True when the property carries something resolvable: a non-empty string,
/// a structured document, or a non-empty sequence of either.
fn has_content(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Array(elements) => elements.iter().any(has_content),
        _ => false,
    }
}

/// An explicit name distinct from the content makes the item an article; a
/// name that is just a prefix of the content is an auto-generated title and
/// does not count.
fn explicit_name(bag: &PropertyBag) -> Option<String> {
    let name = bag.get("name").map(first_value).and_then(Value::as_str)?;
    let name = normalize_whitespace(name);
    if name.is_empty() {
        return None;
    }

    let content = content_text(bag).map(|text| normalize_whitespace(&text));
    match content {
        Some(content) if content.starts_with(&name) => None,
        _ => Some(name),
    }
}

/// Plain-text content of the item: `content` (string, or the `text`/`html`
/// field of a structured value), falling back to `summary`.
fn content_text(bag: &PropertyBag) -> Option<String> {
    let value = bag.get("content").or_else(|| bag.get("summary"))?;
    match first_value(value) {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("text")
            .or_else(|| map.get("html"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> PropertyBag {
        PropertyBag::from_value(value).unwrap()
    }

    #[test]
    fn test_rsvp_wins_over_everything() {
        let b = bag(json!({
            "rsvp": ["yes"],
            "in-reply-to": ["https://example.com/event"]
        }));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Rsvp);
    }

    #[test]
    fn test_invalid_rsvp_value_falls_through() {
        let b = bag(json!({
            "rsvp": ["attending"],
            "in-reply-to": ["https://example.com/event"]
        }));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Reply);
    }

    #[test]
    fn test_reference_properties_map_to_kinds() {
        let cases = [
            ("repost-of", Kind::Repost),
            ("like-of", Kind::Like),
            ("favorite-of", Kind::Favorite),
            ("in-reply-to", Kind::Reply),
            ("bookmark-of", Kind::Bookmark),
            ("read-of", Kind::Read),
            ("listen-of", Kind::Listen),
            ("watch-of", Kind::Watch),
        ];
        for (property, expected) in cases {
            let b = bag(json!({property: ["https://example.com/x"]}));
            assert_eq!(PostTypeDiscovery::new().discover(&b), expected, "{property}");
        }
    }

    #[test]
    fn test_empty_reference_property_is_ignored() {
        let b = bag(json!({"like-of": [], "content": ["hello"]}));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Note);

        let b = bag(json!({"like-of": ["  "], "content": ["hello"]}));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Note);
    }

    #[test]
    fn test_embedded_citation_still_counts() {
        let b = bag(json!({
            "bookmark-of": {"type": "cite", "url": "https://example.com/a"}
        }));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Bookmark);
    }

    #[test]
    fn test_media_properties() {
        let discovery = PostTypeDiscovery::new();
        assert_eq!(
            discovery.discover(&bag(json!({"photo": ["https://example.com/p.jpg"]}))),
            Kind::Photo
        );
        assert_eq!(
            discovery.discover(&bag(json!({"video": ["https://example.com/v.mp4"]}))),
            Kind::Video
        );
    }

    #[test]
    fn test_named_post_is_an_article() {
        let b = bag(json!({
            "name": ["On Pipelines"],
            "content": ["A long discussion of pipelines."]
        }));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Article);
    }

    #[test]
    fn test_auto_generated_title_is_a_note() {
        let b = bag(json!({
            "name": ["A long discussion"],
            "content": ["A long   discussion of pipelines."]
        }));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Note);
    }

    #[test]
    fn test_bare_content_is_a_note() {
        let b = bag(json!({"content": ["just a thought"]}));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Note);
    }

    #[test]
    fn test_structured_content_text_is_used_for_name_check() {
        let b = bag(json!({
            "name": ["Hello world"],
            "content": [{"html": "<p>Hello world and more</p>", "text": "Hello world and more"}]
        }));
        assert_eq!(PostTypeDiscovery::new().discover(&b), Kind::Note);
    }

    #[test]
    fn test_classifier_trait_returns_slug() {
        let b = bag(json!({"bookmark-of": ["https://example.com/a"]}));
        assert_eq!(
            PostTypeDiscovery::new().infer_kind(&b),
            Some("bookmark".to_string())
        );
    }
}
