use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Digest sections, in the order they are rendered.
pub const CATEGORIES: [&str; 6] = [
    "Breaking News",
    "Industry & Business",
    "Tools & Applications",
    "Research & Models",
    "Policy & Ethics",
    "Tutorials & Insights",
];

pub const DEFAULT_CATEGORY: &str = "Industry & Business";

/// Section for items that carry no category at all.
pub const OTHER_CATEGORY: &str = "Other";

/// Returns the canonical spelling of `name` if it is one of [`CATEGORIES`].
pub fn canonical_category(name: &str) -> Option<&'static str> {
    let name = name.trim();
    CATEGORIES
        .iter()
        .copied()
        .find(|category| category.eq_ignore_ascii_case(name))
}

/// One configured feed. Loaded once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSpec {
    pub url: String,
    pub category: String,
    pub source: String,
}

/// One normalized headline extracted from a feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Hex digest of the normalized link.
    pub id: String,
    pub title: String,
    /// Original link, kept for display.
    pub link: String,
    pub published: DateTime<Utc>,
    pub source: String,
    pub category: String,
}

impl NewsItem {
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    pub fn is_paper(&self) -> bool {
        self.source.contains("Papers")
    }
}

// Object style note:
// Everything here runs inside a short lived single-pass process.
// Values are built once per run and handed from stage to stage by value;
// a stage that changes an item returns a new one instead of patching it.
