use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_file: String,
}
