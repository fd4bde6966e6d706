use actix_web::{get, post, web, HttpResponse};
use tracing::{error, info};

use super::education_form::EducationForm;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::education::application::ports::incoming::use_cases::{
    GetSingleEducationError, UpdateEducationError,
};
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner,
    HtmlResponse, IncomingFlashes, PageRenderer,
};
use crate::AppState;

#[get("/education/{id}/edit")]
pub async fn edit_education_page_handler(
    session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let id = path.into_inner();

    let education = match data.education.get_single.execute(id).await {
        Ok(education) => education,
        Err(GetSingleEducationError::NotFound) => return HtmlResponse::not_found(),
        Err(e) => {
            error!(education_id = id, error = %e, "Failed to load education entry");
            return HtmlResponse::internal_error();
        }
    };

    let context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };

    let action = format!("/education/{}/edit", id);
    let context = item_form_context(
        context,
        "education",
        "Edit Education",
        &action,
        Some(&education),
    );
    pages.page("edit_item.html", context, &flashes)
}

#[post("/education/{id}/edit")]
pub async fn update_education_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    form: web::Form<EducationForm>,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let id = path.into_inner();

    match data
        .education
        .update
        .execute(id, form.into_inner().into())
        .await
    {
        Ok(_) => {
            info!(education_id = id, "Education entry updated");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Education updated!"),
            )
        }
        Err(UpdateEducationError::NotFound) => HtmlResponse::not_found(),
        Err(e) => {
            error!(education_id = id, error = %e, "Failed to update education entry");
            HtmlResponse::internal_error()
        }
    }
}
