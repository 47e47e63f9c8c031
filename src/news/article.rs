//! The article record produced by the fetcher.
//!
//! Every field the server sends is optional.  Decoding never fails on a
//! single bad field: an absent, `null`, non-string or blank value simply
//! reads as `None`, and an element that is not even a JSON object becomes an
//! article with every field absent.  Such an article is still valid and is
//! rendered with placeholder text.
//!
//! ## Identity
//!
//! [`ArticleId`] is handed out from a process-wide counter at decode time.
//! It only lets the UI point at one row of the current list (the detail view
//! holds an id, not an index).  Decoding the same payload twice yields
//! different ids, and nothing de-duplicates on it.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Locally generated, per-decode identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(u64);

impl ArticleId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single news item as returned by the latest-news endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    /// Headline.  `None` renders as [`Article::UNTITLED`].
    pub title: Option<String>,
    /// Summary text.  `None` renders as [`Article::NO_DESCRIPTION`].
    pub description: Option<String>,
    /// Address of the full article.  `None` disables "open in browser".
    pub url: Option<String>,
    /// Preview image address (`urlToImage` on the wire).
    pub image_url: Option<String>,
}

impl Article {
    pub const UNTITLED: &'static str = "Untitled";
    pub const NO_DESCRIPTION: &'static str = "No description available.";

    /// Build an article with a fresh id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        url: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: ArticleId::next(),
            title,
            description,
            url,
            image_url,
        }
    }

    /// Decode one element of the envelope's article array.
    ///
    /// Infallible on purpose: whatever the element looks like, an article
    /// comes out.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| -> Option<String> {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self::new(text("title"), text("description"), text("url"), text("urlToImage"))
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::UNTITLED)
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(Self::NO_DESCRIPTION)
    }
}

impl<'de> Deserialize<'de> for Article {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_all_fields() {
        let a = Article::from_value(&json!({
            "title": "Budget passed",
            "description": "Late-night vote",
            "url": "https://example.com/budget",
            "urlToImage": "https://example.com/budget.jpg",
        }));

        assert_eq!(a.title.as_deref(), Some("Budget passed"));
        assert_eq!(a.description.as_deref(), Some("Late-night vote"));
        assert_eq!(a.url.as_deref(), Some("https://example.com/budget"));
        assert_eq!(a.image_url.as_deref(), Some("https://example.com/budget.jpg"));
    }

    #[test]
    fn missing_and_null_fields_read_as_absent() {
        let a = Article::from_value(&json!({ "title": "A", "description": null }));

        assert_eq!(a.title.as_deref(), Some("A"));
        assert!(a.description.is_none());
        assert!(a.url.is_none());
        assert!(a.image_url.is_none());
    }

    #[test]
    fn wrongly_typed_fields_degrade_individually() {
        let a = Article::from_value(&json!({
            "title": 42,
            "description": ["not", "text"],
            "url": { "href": "x" },
            "urlToImage": "https://example.com/i.png",
        }));

        assert!(a.title.is_none());
        assert!(a.description.is_none());
        assert!(a.url.is_none());
        assert_eq!(a.image_url.as_deref(), Some("https://example.com/i.png"));
    }

    #[test]
    fn blank_strings_read_as_absent() {
        let a = Article::from_value(&json!({ "title": "   ", "url": "" }));
        assert!(a.title.is_none());
        assert!(a.url.is_none());
    }

    #[test]
    fn non_object_element_is_an_empty_article() {
        let a = Article::from_value(&json!("just a string"));
        assert_eq!(a.display_title(), Article::UNTITLED);
        assert_eq!(a.display_description(), Article::NO_DESCRIPTION);
        assert!(a.url.is_none());
        assert!(a.image_url.is_none());
    }

    #[test]
    fn ids_are_fresh_per_decode() {
        let v = json!({ "title": "Same" });
        let first = Article::from_value(&v);
        let second = Article::from_value(&v);
        assert_ne!(first.id, second.id);
        assert!(second.id > first.id, "ids increase monotonically");
    }

    #[test]
    fn deserialize_goes_through_permissive_path() {
        let items: Vec<Article> = serde_json::from_str(r#"[{"title":"T"}, null, 7]"#).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].display_title(), "T");
        assert_eq!(items[1].display_title(), Article::UNTITLED);
        assert_eq!(items[2].display_title(), Article::UNTITLED);
    }
}
