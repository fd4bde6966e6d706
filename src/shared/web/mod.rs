pub mod flash;
pub mod form_config;
pub mod layout;
pub mod multipart;
pub mod response;
pub mod templates;

pub use flash::{redirect_with_flash, FlashMessage, FlashSigner, IncomingFlashes};
pub use layout::{item_form_context, layout_context};
pub use multipart::{FormError, MultipartForm, UploadedFile};
pub use response::HtmlResponse;
pub use templates::PageRenderer;
