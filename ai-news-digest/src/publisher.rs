use crate::types::{Digest, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Hands the digest to the external issue step by writing it to a file.
pub struct Publisher {
    output_path: PathBuf,
}

impl Publisher {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub async fn publish(&self, digest: &Digest) -> Result<PathBuf> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.output_path, &digest.markdown).await?;
        info!(
            "Wrote \"{}\" to {} ({} items)",
            digest.issue_title,
            self.output_path.display(),
            digest.item_count
        );
        Ok(self.output_path.clone())
    }
}
