//! Page metadata extraction
//!
//! Turns fetched HTML into a flat classified document. Extraction prefers
//! OpenGraph metadata, falls back to Twitter card tags, then to standard
//! `<meta>`/`<title>` elements. Type discovery reads `og:type`; a page with a
//! title but no `og:type` is classified as a full entry.

use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

use kindling_core::{FailureReason, Jf2Document, TYPE_CARD, TYPE_ENTRY};

/// Extract a classified document from an HTML page.
///
/// Returns `FailureReason::Unclassified` when the page yields neither an
/// `og:type` nor a usable title.
pub fn extract_document(html: &str, source_url: &Url) -> Result<Jf2Document, FailureReason> {
    let page = Html::parse_document(html);

    let name = meta_content(&page, "meta[property=\"og:title\"]")
        .or_else(|| meta_content(&page, "meta[name=\"twitter:title\"]"))
        .or_else(|| title_text(&page));
    let og_type = meta_content(&page, "meta[property=\"og:type\"]");

    let doc_type = match discover_type(og_type.as_deref(), name.as_deref()) {
        Some(t) => t,
        None => return Err(FailureReason::Unclassified),
    };

    let mut doc = Jf2Document::of_type(doc_type);

    if let Some(name) = name {
        doc.insert("name", Value::String(name));
    }

    if let Some(summary) = meta_content(&page, "meta[property=\"og:description\"]")
        .or_else(|| meta_content(&page, "meta[name=\"twitter:description\"]"))
        .or_else(|| meta_content(&page, "meta[name=\"description\"]"))
    {
        doc.insert("summary", Value::String(summary));
    }

    let url = meta_content(&page, "meta[property=\"og:url\"]")
        .or_else(|| canonical_href(&page))
        .and_then(|href| source_url.join(&href).ok())
        .unwrap_or_else(|| source_url.clone());
    doc.insert("url", Value::String(url.to_string()));

    if let Some(author) = meta_content(&page, "meta[name=\"author\"]") {
        doc.insert("author", Value::String(author));
    }
    if let Some(published) = meta_content(&page, "meta[property=\"article:published_time\"]") {
        doc.insert("published", Value::String(published));
    }
    if let Some(site) = meta_content(&page, "meta[property=\"og:site_name\"]") {
        doc.insert("publication", Value::String(site));
    }
    if let Some(image) = meta_content(&page, "meta[property=\"og:image\"]") {
        if let Ok(image) = source_url.join(&image) {
            doc.insert("photo", Value::String(image.to_string()));
        }
    }

    Ok(doc)
}

/// Map an `og:type` (or its absence) to a document type.
fn discover_type(og_type: Option<&str>, name: Option<&str>) -> Option<&'static str> {
    match og_type.map(str::to_ascii_lowercase).as_deref() {
        Some(t) if t.starts_with("video") => Some("video"),
        Some(t) if t.starts_with("music") => Some("audio"),
        Some("profile") => Some(TYPE_CARD),
        Some(_) => Some(TYPE_ENTRY),
        // No og:type: a titled page is still an entry; an untitled one has
        // no discoverable classification
        None if name.is_some_and(|n| !n.trim().is_empty()) => Some(TYPE_ENTRY),
        None => None,
    }
}

fn meta_content(page: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).expect("static meta selector");
    page.select(&selector)
        .find_map(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

fn title_text(page: &Html) -> Option<String> {
    let selector = Selector::parse("title").expect("title selector");
    let text: String = page.select(&selector).next()?.text().collect();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn canonical_href(page: &Html) -> Option<String> {
    let selector = Selector::parse("link[rel=\"canonical\"]").expect("canonical selector");
    page.select(&selector)
        .find_map(|el| el.value().attr("href"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Url {
        Url::parse("https://example.com/posts/42").unwrap()
    }

    #[test]
    fn test_opengraph_article_becomes_entry() {
        let html = r#"<html><head>
            <meta property="og:type" content="article">
            <meta property="og:title" content="A Great Read">
            <meta property="og:description" content="Worth your time.">
            <meta property="og:url" content="https://example.com/a-great-read">
            <meta property="og:site_name" content="Example Blog">
            <title>fallback title</title>
        </head><body></body></html>"#;

        let doc = extract_document(html, &source()).unwrap();
        assert_eq!(doc.doc_type(), Some("entry"));
        assert_eq!(doc.name(), Some("A Great Read"));
        assert_eq!(
            doc.get("summary").and_then(Value::as_str),
            Some("Worth your time.")
        );
        assert_eq!(doc.url(), Some("https://example.com/a-great-read"));
        assert_eq!(
            doc.get("publication").and_then(Value::as_str),
            Some("Example Blog")
        );
    }

    #[test]
    fn test_title_only_page_defaults_to_entry_with_source_url() {
        let html = "<html><head><title>Plain  Page</title></head><body></body></html>";
        let doc = extract_document(html, &source()).unwrap();
        assert_eq!(doc.doc_type(), Some("entry"));
        assert_eq!(doc.name(), Some("Plain Page"));
        assert_eq!(doc.url(), Some("https://example.com/posts/42"));
    }

    #[test]
    fn test_video_and_music_types() {
        let html = r#"<head><meta property="og:type" content="video.movie">
            <meta property="og:title" content="A Film"></head>"#;
        assert_eq!(
            extract_document(html, &source()).unwrap().doc_type(),
            Some("video")
        );

        let html = r#"<head><meta property="og:type" content="music.song">
            <meta property="og:title" content="A Song"></head>"#;
        assert_eq!(
            extract_document(html, &source()).unwrap().doc_type(),
            Some("audio")
        );
    }

    #[test]
    fn test_profile_becomes_card() {
        let html = r#"<head><meta property="og:type" content="profile">
            <meta property="og:title" content="Ada Lovelace"></head>"#;
        let doc = extract_document(html, &source()).unwrap();
        assert_eq!(doc.doc_type(), Some("card"));
    }

    #[test]
    fn test_untitled_untyped_page_is_unclassified() {
        let html = "<html><head></head><body><p>nothing here</p></body></html>";
        assert_eq!(
            extract_document(html, &source()),
            Err(FailureReason::Unclassified)
        );
    }

    #[test]
    fn test_relative_canonical_resolves_against_source() {
        let html = r#"<head><title>Page</title>
            <link rel="canonical" href="/posts/42-canonical"></head>"#;
        let doc = extract_document(html, &source()).unwrap();
        assert_eq!(doc.url(), Some("https://example.com/posts/42-canonical"));
    }
}
