use serde::Serialize;

/// Primary key of the single profile row.
pub const PROFILE_ID: i32 = 1;

pub const PLACEHOLDER_NAME: &str = "New User";
pub const PLACEHOLDER_BIO: &str = "Bio";

/// The site owner's details rendered in the layout of every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub residence: Option<String>,
    pub image_file: String,
}
