//! Request-time denylist configuration.

use serde::Deserialize;

use crate::models::HotEntry;

/// Environment variable holding the denylist JSON.
pub const DENY_LIST_ENV: &str = "DENY_LIST";

/// Substring rules excluding entries from the relayed feed.
///
/// Loaded fresh on every request from the `DENY_LIST` environment
/// variable, a JSON object with optional `deny_domains` and
/// `deny_keywords` string arrays. A missing or malformed value yields the
/// empty list: the relay fails open and filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DenyList {
    #[serde(default)]
    pub deny_domains: Vec<String>,
    #[serde(default)]
    pub deny_keywords: Vec<String>,
}

impl DenyList {
    /// Load from the `DENY_LIST` environment variable.
    pub fn from_env() -> Self {
        match std::env::var(DENY_LIST_ENV) {
            Ok(raw) => Self::from_json(&raw),
            Err(_) => Self::default(),
        }
    }

    /// Parse from a JSON string, falling back to the empty list on error.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Ignoring malformed deny list: {}", e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deny_domains.is_empty() && self.deny_keywords.is_empty()
    }

    /// An entry is denied if its link contains any configured domain
    /// substring, or its title contains any configured keyword substring.
    /// Matching is case-sensitive and unanchored.
    pub fn is_denied(&self, entry: &HotEntry) -> bool {
        self.deny_domains.iter().any(|d| entry.link.contains(d))
            || self.deny_keywords.iter().any(|k| entry.title.contains(k))
    }

    /// Keep the entries matching no rule, preserving input order.
    pub fn filter(&self, entries: Vec<HotEntry>) -> Vec<HotEntry> {
        entries.into_iter().filter(|e| !self.is_denied(e)).collect()
    }
}
