use actix_web::{get, post, web, HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use super::skill_form::SkillForm;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner,
    HtmlResponse, IncomingFlashes, PageRenderer,
};
use crate::skill::application::ports::incoming::use_cases::{
    GetSingleSkillError, UpdateSkillError,
};
use crate::AppState;

#[get("/skill/{id}/edit")]
pub async fn edit_skill_page_handler(
    session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let id = path.into_inner();

    let skill = match data.skill.get_single.execute(id).await {
        Ok(skill) => skill,
        Err(GetSingleSkillError::NotFound) => return HtmlResponse::not_found(),
        Err(e) => {
            error!(skill_id = id, error = %e, "Failed to load skill");
            return HtmlResponse::internal_error();
        }
    };

    let context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };

    let action = format!("/skill/{}/edit", id);
    let context = item_form_context(context, "skill", "Edit Skill", &action, Some(&skill));
    pages.page("edit_item.html", context, &flashes)
}

#[post("/skill/{id}/edit")]
pub async fn update_skill_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let id = path.into_inner();

    let form = match SkillForm::parse(&req, body).await {
        Ok(form) => form,
        Err(e) => {
            warn!(skill_id = id, error = %e, "Rejected skill form");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    match data.skill.update.execute(id, form.into_update_command()).await {
        Ok(_) => {
            info!(skill_id = id, "Skill updated");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Skill has been updated!"),
            )
        }
        Err(UpdateSkillError::NotFound) => HtmlResponse::not_found(),
        Err(e) => {
            error!(skill_id = id, error = %e, "Failed to update skill");
            HtmlResponse::internal_error()
        }
    }
}
