use actix_web::{get, post, web, HttpResponse};
use tracing::{error, info};

use super::education_form::EducationForm;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::education::application::domain::entities::Education;
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner,
    HtmlResponse, IncomingFlashes, PageRenderer,
};
use crate::AppState;

#[get("/education/new")]
pub async fn new_education_page_handler(
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
        "education",
        "New Education",
        "/education/new",
        None::<&Education>,
    );
    pages.page("edit_item.html", context, &flashes)
}

#[post("/education/new")]
pub async fn create_education_handler(
    _session: AdminSession,
    form: web::Form<EducationForm>,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    match data.education.create.execute(form.into_inner().into()).await {
        Ok(education) => {
            info!(education_id = education.id, "Education entry created");
            redirect_with_flash("/dashboard", &flash, FlashMessage::success("Education added!"))
        }
        Err(e) => {
            error!(error = %e, "Failed to create education entry");
            HtmlResponse::internal_error()
        }
    }
}
