//! Per-kind display metadata
//!
//! The short-link prefix characters follow the whistle type scheme
//! (<http://tantek.pbworks.com/w/page/21743973/Whistle>): favorites and likes
//! share `f`, links use `h`, geo checkins `g`, and so on.

use kindling_core::{KindInfo, KindTaxonomy, PostFormat};

use crate::kind::Kind;

/// The standard taxonomy: a fixed metadata table for every [`Kind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTaxonomy;

impl StandardTaxonomy {
    pub fn new() -> Self {
        Self
    }

    /// Metadata for a kind.
    pub fn kind_info(&self, kind: Kind) -> KindInfo {
        let (display_string, prefix_text, display_format, shortlink_prefix) = match kind {
            Kind::Note => ("Note", "", PostFormat::Aside, 't'),
            Kind::Article => ("Article", "", PostFormat::Standard, 'b'),
            Kind::Reply => ("Reply", "In Reply To ", PostFormat::Link, 't'),
            Kind::Bookmark => ("Bookmark", "Bookmarked ", PostFormat::Link, 'h'),
            Kind::Like => ("Like", "Liked ", PostFormat::Link, 'f'),
            Kind::Favorite => ("Favorite", "Favorited ", PostFormat::Link, 'f'),
            Kind::Repost => ("Repost", "Reposted ", PostFormat::Link, 'f'),
            Kind::Read => ("Read", "Read ", PostFormat::Status, 'x'),
            Kind::Listen => ("Listen", "Listened to ", PostFormat::Audio, 'a'),
            Kind::Watch => ("Watch", "Watched ", PostFormat::Video, 'v'),
            Kind::Photo => ("Photo", "", PostFormat::Image, 'p'),
            Kind::Video => ("Video", "", PostFormat::Video, 'v'),
            Kind::Audio => ("Audio", "", PostFormat::Audio, 'a'),
            Kind::Rsvp => ("RSVP", "RSVPed ", PostFormat::Status, 'e'),
            Kind::Checkin => ("Checkin", "Checked Into ", PostFormat::Status, 'g'),
        };
        KindInfo {
            display_string: display_string.to_string(),
            prefix_text: prefix_text.to_string(),
            display_format,
            shortlink_prefix,
        }
    }
}

impl KindTaxonomy for StandardTaxonomy {
    fn lookup(&self, kind_slug: &str) -> Option<KindInfo> {
        Kind::from_slug(kind_slug).map(|kind| self.kind_info(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_slug() {
        let taxonomy = StandardTaxonomy::new();
        let info = taxonomy.lookup("bookmark").unwrap();
        assert_eq!(info.display_string, "Bookmark");
        assert_eq!(info.prefix_text, "Bookmarked ");
        assert_eq!(info.display_format, PostFormat::Link);
        assert_eq!(info.shortlink_prefix, 'h');
    }

    #[test]
    fn test_lookup_unknown_slug() {
        assert!(StandardTaxonomy::new().lookup("weblog").is_none());
    }

    #[test]
    fn test_likes_and_favorites_share_shortlink_prefix() {
        let taxonomy = StandardTaxonomy::new();
        assert_eq!(taxonomy.kind_info(Kind::Like).shortlink_prefix, 'f');
        assert_eq!(taxonomy.kind_info(Kind::Favorite).shortlink_prefix, 'f');
    }

    #[test]
    fn test_plain_kinds_have_no_prefix_text() {
        let taxonomy = StandardTaxonomy::new();
        assert_eq!(taxonomy.kind_info(Kind::Note).prefix_text, "");
        assert_eq!(taxonomy.kind_info(Kind::Article).prefix_text, "");
    }
}
