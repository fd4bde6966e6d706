use actix_web::{post, web, HttpResponse};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::web::{redirect_with_flash, FlashMessage, FlashSigner, HtmlResponse};
use crate::AppState;

#[post("/project/{id}/delete")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.project.delete.execute(id).await {
        Ok(()) => {
            info!(project_id = id, "Project deleted");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Project has been deleted!"),
            )
        }
        Err(DeleteProjectError::NotFound) => HtmlResponse::not_found(),
        Err(e) => {
            error!(project_id = id, error = %e, "Failed to delete project");
            HtmlResponse::internal_error()
        }
    }
}
