mod delete_education;
mod edit_education;
mod education_form;
mod new_education;

pub use delete_education::delete_education_handler;
pub use edit_education::{edit_education_page_handler, update_education_handler};
pub use new_education::{create_education_handler, new_education_page_handler};
