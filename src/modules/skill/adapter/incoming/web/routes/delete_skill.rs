use actix_web::{post, web, HttpResponse};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::{redirect_with_flash, FlashMessage, FlashSigner, HtmlResponse};
use crate::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::AppState;

#[post("/skill/{id}/delete")]
pub async fn delete_skill_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.skill.delete.execute(id).await {
        Ok(()) => {
            info!(skill_id = id, "Skill deleted");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Skill has been deleted!"),
            )
        }
        Err(DeleteSkillError::NotFound) => HtmlResponse::not_found(),
        Err(e) => {
            error!(skill_id = id, error = %e, "Failed to delete skill");
            HtmlResponse::internal_error()
        }
    }
}
