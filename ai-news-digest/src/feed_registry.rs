use crate::types::{FeedSpec, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
struct FeedMeta {
    category: String,
    source: String,
}

/// The feeds configured for a run, keyed by URL in the registry file.
#[derive(Debug, Clone, Default)]
pub struct FeedRegistry {
    feeds: Vec<FeedSpec>,
}

impl FeedRegistry {
    pub fn new(feeds: Vec<FeedSpec>) -> Self {
        Self { feeds }
    }

    /// Load the registry from a JSON file. A missing or malformed file is
    /// logged and yields an empty registry rather than an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(registry) => {
                info!("Loaded {} feeds from {}", registry.len(), path.display());
                registry
            }
            Err(e) => {
                error!("Error loading feed registry {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, FeedMeta> = serde_json::from_str(content)?;
        let feeds = raw
            .into_iter()
            .map(|(url, meta)| FeedSpec {
                url,
                category: meta.category,
                source: meta.source,
            })
            .collect();
        Ok(Self { feeds })
    }

    pub fn feeds(&self) -> &[FeedSpec] {
        &self.feeds
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}
