use actix_web::{get, post, web, HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use super::skill_form::SkillForm;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner,
    HtmlResponse, IncomingFlashes, PageRenderer,
};
use crate::skill::application::domain::entities::Skill;
use crate::AppState;

#[get("/skill/new")]
pub async fn new_skill_page_handler(
    session: AdminSession,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };

    let context = item_form_context(context, "skill", "New Skill", "/skill/new", None::<&Skill>);
    pages.page("edit_item.html", context, &flashes)
}

#[post("/skill/new")]
pub async fn create_skill_handler(
    _session: AdminSession,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let form = match SkillForm::parse(&req, body).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "Rejected skill form");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    match data.skill.create.execute(form.into_create_command()).await {
        Ok(skill) => {
            info!(skill_id = skill.id, "Skill created");
            redirect_with_flash(
                "/dashboard",
                &flash,
                FlashMessage::success("Skill has been added!"),
            )
        }
        Err(e) => {
            error!(error = %e, "Failed to create skill");
            HtmlResponse::internal_error()
        }
    }
}
