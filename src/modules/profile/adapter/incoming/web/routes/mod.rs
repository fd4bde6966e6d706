mod edit_profile;

pub use edit_profile::{edit_profile_page_handler, update_profile_handler};
