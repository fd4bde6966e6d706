mod store_image;

pub use store_image::{ImageUploadError, ImageUploader};
