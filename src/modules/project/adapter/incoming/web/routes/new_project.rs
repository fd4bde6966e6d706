use actix_web::{get, post, web, HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use super::project_form::ProjectForm;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::project::application::domain::entities::Project;
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner,
    HtmlResponse, IncomingFlashes, PageRenderer,
};
use crate::AppState;

#[get("/project/new")]
pub async fn new_project_page_handler(
    session: AdminSession,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };

    let context = item_form_context(
        context,
        "project",
        "New Project",
        "/project/new",
        None::<&Project>,
    );
    pages.page("edit_item.html", context, &flashes)
}

#[post("/project/new")]
pub async fn create_project_handler(
    _session: AdminSession,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let form = match ProjectForm::parse(&req, body).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "Rejected project form");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    match data.project.create.execute(form.into_create_command()).await {
        Ok(project) => {
            info!(project_id = project.id, image = %project.image_file, "Project created");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Project has been created!"),
            )
        }
        Err(e) => {
            error!(error = %e, "Failed to create project");
            HtmlResponse::internal_error()
        }
    }
}
