use std::path::{Path, PathBuf};

/// Where accepted images go and which extensions are accepted.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub upload_dir: PathBuf,
    pub allowed_extensions: &'static [&'static str],
    pub default_image: &'static str,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::UPLOAD_FOLDER)
    }
}

impl UploadPolicy {
    pub const UPLOAD_FOLDER: &'static str = "static/images";
    pub const ALLOWED_EXTENSIONS: &'static [&'static str] = &["png", "jpg", "jpeg", "gif"];
    pub const DEFAULT_IMAGE: &'static str = "default.jpg";

    /// Same allow-list, different directory. Handy for tests.
    pub fn new(upload_dir: impl AsRef<Path>) -> Self {
        Self {
            upload_dir: upload_dir.as_ref().to_path_buf(),
            allowed_extensions: Self::ALLOWED_EXTENSIONS,
            default_image: Self::DEFAULT_IMAGE,
        }
    }

    /// True when `filename` has a dot and the part after the last one,
    /// lower-cased, is allow-listed.
    pub fn allows(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_lowercase();
                self.allowed_extensions.contains(&ext.as_str())
            }
            None => false,
        }
    }
}
