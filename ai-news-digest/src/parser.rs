use crate::types::{DigestError, ParsedEntry, ParsedFeed, Result};
use feed_rs::parser;
use tracing::debug;

pub struct FeedParser;

impl FeedParser {
    /// Parse RSS, Atom or JSON Feed content into entries.
    pub fn parse_feed(content: &str) -> Result<ParsedFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| DigestError::Parse(format!("Failed to parse feed: {}", e)))?;

        let title = feed.title.map(|t| t.content);
        let entries: Vec<ParsedEntry> = feed.entries.into_iter().map(Self::parse_entry).collect();

        debug!("Parsed feed with {} entries", entries.len());

        Ok(ParsedFeed { title, entries })
    }

    fn parse_entry(entry: feed_rs::model::Entry) -> ParsedEntry {
        // Prefer an alternate link; some Atom feeds list self/edit links first.
        let link = entry
            .links
            .iter()
            .find(|l| l.rel.as_deref().map_or(true, |rel| rel == "alternate"))
            .or_else(|| entry.links.first())
            .map(|l| l.href.clone());

        ParsedEntry {
            title: entry.title.map(|t| t.content),
            link,
            published_at: entry.published,
            updated_at: entry.updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example AI</title>
    <link>https://example.com</link>
    <description>Example</description>
    <item>
      <title>Model ships</title>
      <link>https://example.com/model-ships</link>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>No date here</title>
      <link>https://example.com/undated</link>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom AI</title>
  <id>urn:example</id>
  <updated>2024-01-02T10:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:example:1</id>
    <link rel="alternate" href="https://example.org/entry"/>
    <updated>2024-01-02T10:00:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn parses_rss_items() {
        let feed = FeedParser::parse_feed(RSS).unwrap();
        assert_eq!(feed.title.as_deref(), Some("Example AI"));
        assert_eq!(feed.entries.len(), 2);
        assert_eq!(feed.entries[0].title.as_deref(), Some("Model ships"));
        assert_eq!(feed.entries[0].link.as_deref(), Some("https://example.com/model-ships"));
        assert!(feed.entries[0].published_at.is_some());
        assert!(feed.entries[1].published_at.is_none());
    }

    #[test]
    fn parses_atom_updated_dates() {
        let feed = FeedParser::parse_feed(ATOM).unwrap();
        let entry = &feed.entries[0];
        assert_eq!(entry.link.as_deref(), Some("https://example.org/entry"));
        assert!(entry.updated_at.is_some());
    }

    #[test]
    fn rejects_non_feed_content() {
        let err = FeedParser::parse_feed("<html><body>not a feed</body></html>").unwrap_err();
        assert!(matches!(err, DigestError::Parse(_)));
    }
}
