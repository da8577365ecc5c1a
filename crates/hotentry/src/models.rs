use serde::{Deserialize, Serialize};

/// One bookmarked entry as received from the upstream hot-entry feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Publication date in the upstream's own format, passed through as-is.
    pub date: String,
    /// Bookmark count reported by upstream. Carried for diagnostics only,
    /// never emitted into the relayed feed.
    pub bookmark_count: u32,
}

/// One item of the relayed RSS 2.0 feed.
#[derive(Debug, Clone, PartialEq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
}

impl From<HotEntry> for RssItem {
    fn from(entry: HotEntry) -> Self {
        Self {
            title: entry.title,
            link: entry.link,
            description: entry.description,
            pub_date: entry.date,
        }
    }
}

/// Channel metadata of the relayed feed. Fixed for this service; the
/// default is the upstream hot-entry channel minus the denied entries.
#[derive(Debug, Clone)]
pub struct ChannelMeta {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl Default for ChannelMeta {
    fn default() -> Self {
        Self {
            title: "はてなブックマーク - 人気エントリー - 総合 w/o anond".to_string(),
            link: "https://b.hatena.ne.jp/hotentry/all".to_string(),
            description: "最近の人気エントリー w/o anond".to_string(),
        }
    }
}
