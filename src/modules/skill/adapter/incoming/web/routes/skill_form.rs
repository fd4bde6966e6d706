use actix_web::{web, HttpRequest};

use crate::media::application::domain::entities::ImageUpload;
use crate::shared::web::{FormError, MultipartForm};
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, UpdateSkillCommand,
};

#[derive(Debug)]
pub struct SkillForm {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

impl SkillForm {
    pub async fn parse(req: &HttpRequest, body: web::Bytes) -> Result<Self, FormError> {
        let mut form = MultipartForm::parse(req, body).await?;

        Ok(Self {
            name: form.required("name")?,
            description: form.optional("description"),
            image: form.take_file("image_file").map(ImageUpload::from),
        })
    }

    pub fn into_create_command(self) -> CreateSkillCommand {
        CreateSkillCommand {
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }

    pub fn into_update_command(self) -> UpdateSkillCommand {
        UpdateSkillCommand {
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }
}
