mod login;
mod logout;

pub use login::{login_handler, login_page_handler, LOGIN_FAILED_MESSAGE};
pub use logout::logout_handler;
