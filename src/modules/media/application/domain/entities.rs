use crate::shared::web::UploadedFile;

/// Raw image bytes as submitted, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl From<UploadedFile> for ImageUpload {
    fn from(file: UploadedFile) -> Self {
        Self {
            file_name: file.file_name,
            content: file.content,
        }
    }
}
