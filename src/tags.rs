use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known tag keys read by the recommendation engine
pub mod keys {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const OG_TITLE: &str = "og:title";
    pub const OG_DESCRIPTION: &str = "og:description";
    pub const OG_IMAGE: &str = "og:image";
    pub const OG_URL: &str = "og:url";
    pub const TWITTER_CARD: &str = "twitter:card";
    pub const TWITTER_TITLE: &str = "twitter:title";
    pub const TWITTER_DESCRIPTION: &str = "twitter:description";
    pub const TWITTER_IMAGE: &str = "twitter:image";
    pub const CANONICAL: &str = "canonical";
    pub const ROBOTS: &str = "robots";
}

/// Meta tags extracted from a page, keyed by tag name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap(BTreeMap<String, String>);

impl TagMap {
    /// Create an empty tag map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tag value, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value of a tag, if the key exists at all
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value of a tag that is present with non-empty content.
    ///
    /// An empty value counts as missing.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Whether a tag is present with non-empty content
    pub fn has(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Whether a tag key exists, even with an empty value
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_values_count_as_missing() {
        let tags: TagMap = [("title", "   "), ("description", "")].into_iter().collect();

        assert!(tags.has("title"));
        assert_eq!(tags.value("title"), Some("   "));
        assert!(tags.contains_key("description"));
        assert!(!tags.has("description"));
        assert_eq!(tags.get("description"), Some(""));
        assert_eq!(tags.value("description"), None);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let tags: TagMap = [("og:title", "Hello"), ("canonical", "https://example.com")]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(
            json,
            r#"{"canonical":"https://example.com","og:title":"Hello"}"#
        );

        let back: TagMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
