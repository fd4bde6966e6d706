use actix_web::{get, post, web, HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use super::project_form::ProjectForm;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, UpdateProjectError,
};
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner,
    HtmlResponse, IncomingFlashes, PageRenderer,
};
use crate::AppState;

#[get("/project/{id}/edit")]
pub async fn edit_project_page_handler(
    session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let id = path.into_inner();

    let project = match data.project.get_single.execute(id).await {
        Ok(project) => project,
        Err(GetSingleProjectError::NotFound) => return HtmlResponse::not_found(),
        Err(e) => {
            error!(project_id = id, error = %e, "Failed to load project");
            return HtmlResponse::internal_error();
        }
    };

    let context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };

    let action = format!("/project/{}/edit", id);
    let context = item_form_context(context, "project", "Edit Project", &action, Some(&project));
    pages.page("edit_item.html", context, &flashes)
}

#[post("/project/{id}/edit")]
pub async fn update_project_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let id = path.into_inner();

    let form = match ProjectForm::parse(&req, body).await {
        Ok(form) => form,
        Err(e) => {
            warn!(project_id = id, error = %e, "Rejected project form");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    match data.project.update.execute(id, form.into_update_command()).await {
        Ok(project) => {
            info!(project_id = project.id, "Project updated");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Project has been updated!"),
            )
        }
        Err(UpdateProjectError::NotFound) => HtmlResponse::not_found(),
        Err(e) => {
            error!(project_id = id, error = %e, "Failed to update project");
            HtmlResponse::internal_error()
        }
    }
}
