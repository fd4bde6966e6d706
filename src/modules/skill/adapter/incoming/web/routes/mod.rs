mod delete_skill;
mod edit_skill;
mod new_skill;
mod skill_form;

pub use delete_skill::delete_skill_handler;
pub use edit_skill::{edit_skill_page_handler, update_skill_handler};
pub use new_skill::{create_skill_handler, new_skill_page_handler};
