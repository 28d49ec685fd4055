//! The kind vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic classification of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Note,
    Article,
    Reply,
    Bookmark,
    Like,
    Favorite,
    Repost,
    Read,
    Listen,
    Watch,
    Photo,
    Video,
    Audio,
    Rsvp,
    Checkin,
}

impl Kind {
    /// Every kind, in display order.
    pub const ALL: [Kind; 15] = [
        Kind::Note,
        Kind::Article,
        Kind::Reply,
        Kind::Bookmark,
        Kind::Like,
        Kind::Favorite,
        Kind::Repost,
        Kind::Read,
        Kind::Listen,
        Kind::Watch,
        Kind::Photo,
        Kind::Video,
        Kind::Audio,
        Kind::Rsvp,
        Kind::Checkin,
    ];

    /// The kind's slug, e.g. `"bookmark"`.
    pub fn as_slug(&self) -> &'static str {
        match self {
            Kind::Note => "note",
            Kind::Article => "article",
            Kind::Reply => "reply",
            Kind::Bookmark => "bookmark",
            Kind::Like => "like",
            Kind::Favorite => "favorite",
            Kind::Repost => "repost",
            Kind::Read => "read",
            Kind::Listen => "listen",
            Kind::Watch => "watch",
            Kind::Photo => "photo",
            Kind::Video => "video",
            Kind::Audio => "audio",
            Kind::Rsvp => "rsvp",
            Kind::Checkin => "checkin",
        }
    }

    /// Parse a slug back into a kind.
    pub fn from_slug(slug: &str) -> Option<Kind> {
        Kind::ALL.iter().copied().find(|k| k.as_slug() == slug)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}
