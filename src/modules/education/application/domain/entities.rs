use serde::Serialize;

/// One line of the education history shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub id: i32,
    pub degree: String,
    pub institution: String,
    /// Free text such as "2016 - 2020".
    pub year: String,
    pub description: Option<String>,
}
