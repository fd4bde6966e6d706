use actix_web::{web, HttpRequest};

use crate::media::application::domain::entities::ImageUpload;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, UpdateProjectCommand,
};
use crate::shared::web::{FormError, MultipartForm};

/// Fields of the project create/edit form.
#[derive(Debug)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<ImageUpload>,
}

impl ProjectForm {
    pub async fn parse(req: &HttpRequest, body: web::Bytes) -> Result<Self, FormError> {
        let mut form = MultipartForm::parse(req, body).await?;

        Ok(Self {
            title: form.required("title")?,
            description: form.required("description")?,
            link: form.optional("link"),
            image: form.take_file("image_file").map(ImageUpload::from),
        })
    }

    pub fn into_create_command(self) -> CreateProjectCommand {
        CreateProjectCommand {
            title: self.title,
            description: self.description,
            link: self.link,
            image: self.image,
        }
    }

    pub fn into_update_command(self) -> UpdateProjectCommand {
        UpdateProjectCommand {
            title: self.title,
            description: self.description,
            link: self.link,
            image: self.image,
        }
    }
}
