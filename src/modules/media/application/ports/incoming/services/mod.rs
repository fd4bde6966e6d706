mod store_image_service;

pub use store_image_service::ImageUploadService;
