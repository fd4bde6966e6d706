mod delete_project;
mod edit_project;
mod new_project;
mod project_form;

pub use delete_project::delete_project_handler;
pub use edit_project::{edit_project_page_handler, update_project_handler};
pub use new_project::{create_project_handler, new_project_page_handler};
