use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Failed to write image {name}: {reason}")]
    WriteFailed { name: String, reason: String },
}

/// Persists image bytes under an already-sanitized name.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Overwrites any existing file with the same name.
    async fn save(&self, name: &str, content: &[u8]) -> Result<(), ImageStoreError>;
}
