use actix_web::{post, web, HttpResponse};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::education::application::ports::incoming::use_cases::DeleteEducationError;
use crate::shared::web::{redirect_with_flash, FlashMessage, FlashSigner, HtmlResponse};
use crate::AppState;

#[post("/education/{id}/delete")]
pub async fn delete_education_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.education.delete.execute(id).await {
        Ok(()) => {
            info!(education_id = id, "Education entry deleted");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Education deleted!"),
            )
        }
        Err(DeleteEducationError::NotFound) => HtmlResponse::not_found(),
        Err(e) => {
            error!(education_id = id, error = %e, "Failed to delete education entry");
            HtmlResponse::internal_error()
        }
    }
}
