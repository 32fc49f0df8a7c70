use crate::models::ChannelRecord;
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

// Matches one declaration triple: quoted `id`, `name` and `youtubeChannelId`
// values in that exact relative order, with anything (line breaks included)
// in between. A value opens with either quote style and must close with the
// same one. Field order is load-bearing: reordering the keys or inserting
// another field between them stops the block from matching, with no error.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)id:\s*(?:'([^']*)'|"([^"]*)"),.*?name:\s*(?:'([^']*)'|"([^"]*)"),.*?youtubeChannelId:\s*(?:'([^']*)'|"([^"]*)")"#,
    )
    .expect("declaration pattern is valid")
});

/// Read the roster file and extract its channel declarations in file order.
///
/// A missing or unreadable file is logged and yields an empty roster; the
/// caller treats that as "nothing to do", not a failure.
pub fn load_roster(path: &Path) -> Vec<ChannelRecord> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read roster file");
            return Vec::new();
        }
    };

    extract_channels(&contents)
}

/// Extract one record per matched declaration triple, in source order.
pub fn extract_channels(contents: &str) -> Vec<ChannelRecord> {
    DECLARATION
        .captures_iter(contents)
        .map(|caps| ChannelRecord {
            member_id: quoted(&caps, 1, 2),
            name: quoted(&caps, 3, 4),
            youtube_id: quoted(&caps, 5, 6),
        })
        .collect()
}

// Exactly one of the two groups participates in a match, depending on which
// quote character opened the value.
fn quoted(caps: &Captures<'_>, single: usize, double: usize) -> String {
    caps.get(single)
        .or_else(|| caps.get(double))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_single_block() {
        let contents = "id: 'member_a', name: 'Member A', youtubeChannelId: 'UC123'";
        let channels = extract_channels(contents);

        assert_eq!(
            channels,
            vec![ChannelRecord {
                member_id: "member_a".to_string(),
                name: "Member A".to_string(),
                youtube_id: "UC123".to_string(),
            }]
        );
    }

    #[test]
    fn test_extracts_blocks_in_source_order() {
        let contents = r#"
            export const MEMBERS: Creator[] = [
                {
                    id: "manaka_tomori",
                    name: "Manaka Tomori",
                    youtubeChannelId: "UCuWoH9mx0EgT69UyVxaw1NQ",
                    xUsername: "TomoriManaka",
                },
                {
                    id: "cosmo_kamizuru",
                    name: "Cosmo Kamizuru",
                    youtubeChannelId: "UCU8VGKDhiSHLerg4wYXjhtw",
                },
            ];
        "#;

        let channels = extract_channels(contents);
        let ids: Vec<&str> = channels.iter().map(|c| c.member_id.as_str()).collect();
        assert_eq!(ids, vec!["manaka_tomori", "cosmo_kamizuru"]);
        assert_eq!(channels[0].name, "Manaka Tomori");
        assert_eq!(channels[1].youtube_id, "UCU8VGKDhiSHLerg4wYXjhtw");
    }

    #[test]
    fn test_intervening_text_is_skipped() {
        // The separator between keys is a wildcard, so unrelated fields
        // declared between them are stepped over.
        let contents =
            "id: 'a',\n  name: 'A',\n  xUsername: 'a_x',\n  youtubeChannelId: 'UCA',\n  calendarUrl: 'https://example.com/a.ics'";
        let channels = extract_channels(contents);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].youtube_id, "UCA");
    }

    #[test]
    fn test_mixed_quote_styles() {
        let contents = r#"id: "member_a", name: 'Member A', youtubeChannelId: "UC123""#;
        let channels = extract_channels(contents);

        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].member_id, "member_a");
        assert_eq!(channels[0].name, "Member A");
        assert_eq!(channels[0].youtube_id, "UC123");
    }

    #[test]
    fn test_mismatched_quotes_do_not_match() {
        let contents = r#"id: 'member_a", name: 'Member A', youtubeChannelId: 'UC123'"#;
        assert!(extract_channels(contents).is_empty());
    }

    #[test]
    fn test_reordered_fields_do_not_match() {
        let contents = "name: 'Member A', id: 'member_a', youtubeChannelId: 'UC123'";
        assert!(extract_channels(contents).is_empty());
    }

    #[test]
    fn test_empty_contents() {
        assert!(extract_channels("").is_empty());
    }

    #[test]
    fn test_unrelated_contents() {
        assert!(extract_channels("export const FEATURE_FLAGS = {};").is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_roster() {
        let channels = load_roster(Path::new("/nonexistent/constants.ts"));
        assert!(channels.is_empty());
    }
}
