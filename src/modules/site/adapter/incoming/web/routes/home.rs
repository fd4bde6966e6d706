use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::{layout_context, HtmlResponse, IncomingFlashes, PageRenderer};
use crate::AppState;

/// Landing page: skills and education history.
#[get("/")]
pub async fn home_handler(
    session: Option<AdminSession>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let skills = match data.skill.get_list.execute().await {
        Ok(skills) => skills,
        Err(e) => {
            error!(error = %e, "Failed to list skills");
            return HtmlResponse::internal_error();
        }
    };

    let education_list = match data.education.get_list.execute().await {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "Failed to list education");
            return HtmlResponse::internal_error();
        }
    };

    let mut context = match layout_context(&data, session.as_ref()).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };
    context.insert("skills", &skills);
    context.insert("education_list", &education_list);

    pages.page("home.html", context, &flashes)
}
