use async_trait::async_trait;
use std::path::PathBuf;

use crate::media::application::ports::outgoing::{ImageStore, ImageStoreError};

/// Writes images into a directory on the local filesystem, creating it on
/// first use.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, name: &str, content: &[u8]) -> Result<(), ImageStoreError> {
        let write_failed = |e: std::io::Error| ImageStoreError::WriteFailed {
            name: name.to_string(),
            reason: e.to_string(),
        };

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(write_failed)?;
        tokio::fs::write(self.root.join(name), content)
            .await
            .map_err(write_failed)?;

        Ok(())
    }
}
