use serde::Deserialize;

use crate::education::application::ports::outgoing::EducationData;

/// `application/x-www-form-urlencoded` body of the education create/edit form.
#[derive(Debug, Deserialize)]
pub struct EducationForm {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
}

impl From<EducationForm> for EducationData {
    fn from(form: EducationForm) -> Self {
        EducationData {
            degree: form.degree,
            institution: form.institution,
            year: form.year,
            description: form.description,
        }
    }
}
