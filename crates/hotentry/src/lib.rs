//! Hatena Bookmark hot-entry feed domain.
//!
//! Everything between the upstream feed and the relayed RSS 2.0 document
//! lives here: the fetch client, the feed parser, the denylist, and the
//! output writer. The [`relay`] function composes the pure part of the
//! pipeline (parse → filter → serialize) over an already-fetched body.

mod client;
pub mod denylist;
mod error;
pub mod models;
mod parser;
mod writer;

pub use client::{HotentryClient, DEFAULT_UPSTREAM_URL};
pub use denylist::DenyList;
pub use error::HotentryError;
pub use models::{ChannelMeta, HotEntry, RssItem};
pub use parser::parse_hotentry_feed;
pub use writer::write_rss;

pub type Result<T> = std::result::Result<T, HotentryError>;

/// Parse a raw upstream feed body, drop denied entries, and serialize the
/// survivors as RSS 2.0 text. Entry order is preserved.
pub fn relay(xml: &[u8], deny: &DenyList, meta: &ChannelMeta) -> Result<String> {
    let entries = parse_hotentry_feed(xml)?;
    let total = entries.len();
    let kept = deny.filter(entries);
    tracing::info!(total, kept = kept.len(), "Filtered hot-entry feed");

    let items: Vec<RssItem> = kept.into_iter().map(RssItem::from).collect();
    write_rss(meta, &items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns="http://purl.org/rss/1.0/"
         xmlns:dc="http://purl.org/dc/elements/1.1/"
         xmlns:hatena="http://www.hatena.ne.jp/info/xmlns#">
  <channel rdf:about="https://b.hatena.ne.jp/hotentry/all">
    <title>はてなブックマーク - 人気エントリー - 総合</title>
    <link>https://b.hatena.ne.jp/hotentry/all</link>
    <description>最近の人気エントリー</description>
  </channel>
  <item rdf:about="http://good.example/1">
    <title>Example A</title>
    <link>http://good.example/1</link>
    <description>first</description>
    <dc:date>2024-01-01T00:00:00Z</dc:date>
    <hatena:bookmarkcount>120</hatena:bookmarkcount>
  </item>
  <item rdf:about="http://bad.example/2">
    <title>Spam B</title>
    <link>http://bad.example/2</link>
    <description>second</description>
    <dc:date>2024-01-02T00:00:00Z</dc:date>
    <hatena:bookmarkcount>3</hatena:bookmarkcount>
  </item>
</rdf:RDF>"#;

    #[test]
    fn relays_only_entries_passing_the_denylist() {
        let deny = DenyList {
            deny_domains: vec!["bad.example".to_string()],
            deny_keywords: vec![],
        };

        let out = relay(FEED.as_bytes(), &deny, &ChannelMeta::default()).unwrap();

        assert_eq!(out.matches("<item>").count(), 1);
        assert!(out.contains("<title>Example A</title>"));
        assert!(out.contains("<link>http://good.example/1</link>"));
        assert!(!out.contains("Spam B"));
        assert!(out.starts_with("<?xml version='1.0' encoding='UTF-8'?>"));
    }

    #[test]
    fn empty_denylist_relays_everything() {
        let out = relay(FEED.as_bytes(), &DenyList::default(), &ChannelMeta::default()).unwrap();

        assert_eq!(out.matches("<item>").count(), 2);
        let a = out.find("Example A").unwrap();
        let b = out.find("Spam B").unwrap();
        assert!(a < b, "upstream order must be preserved");
    }

    #[test]
    fn malformed_feed_aborts_the_relay() {
        let deny = DenyList::default();
        let err = relay(b"<rdf:RDF><item></oops>", &deny, &ChannelMeta::default()).unwrap_err();
        assert!(matches!(err, HotentryError::Parse(_)));
    }
}
