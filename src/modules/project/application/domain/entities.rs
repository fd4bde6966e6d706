use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_file: String,
    pub link: Option<String>,
}
