use async_trait::async_trait;
use tracing::debug;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::domain::filename::secure_filename;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::{ImageUploadError, ImageUploader};
use crate::media::application::ports::outgoing::ImageStore;

pub struct ImageUploadService<S>
where
    S: ImageStore,
{
    store: S,
    policy: UploadPolicy,
}

impl<S> ImageUploadService<S>
where
    S: ImageStore,
{
    pub fn new(store: S, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }

    /// The sanitized name, or `None` if the upload must be ignored.
    fn accepted_name(&self, file_name: &str) -> Option<String> {
        if !self.policy.allows(file_name) {
            debug!(file_name, "Upload rejected: extension not allowed");
            return None;
        }

        let safe = secure_filename(file_name);
        if safe.is_empty() || !self.policy.allows(&safe) {
            debug!(file_name, sanitized = %safe, "Upload rejected after sanitizing");
            return None;
        }

        Some(safe)
    }
}

#[async_trait]
impl<S> ImageUploader for ImageUploadService<S>
where
    S: ImageStore,
{
    async fn store(&self, upload: Option<ImageUpload>) -> Result<Option<String>, ImageUploadError> {
        let Some(upload) = upload else {
            return Ok(None);
        };

        let Some(name) = self.accepted_name(&upload.file_name) else {
            return Ok(None);
        };

        self.store.save(&name, &upload.content).await?;
        debug!(name = %name, bytes = upload.content.len(), "Image stored");

        Ok(Some(name))
    }
}
