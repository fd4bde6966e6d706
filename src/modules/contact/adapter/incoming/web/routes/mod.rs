mod contact;

pub use contact::{contact_page_handler, submit_message_handler};
