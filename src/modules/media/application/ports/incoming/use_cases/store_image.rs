use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::outgoing::ImageStoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageUploadError {
    #[error(transparent)]
    Store(#[from] ImageStoreError),
}

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// `Ok(Some(name))` when the image was accepted and written,
    /// `Ok(None)` when there was nothing acceptable to store.
    async fn store(&self, upload: Option<ImageUpload>) -> Result<Option<String>, ImageUploadError>;
}
