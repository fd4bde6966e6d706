use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::{layout_context, HtmlResponse, IncomingFlashes, PageRenderer};
use crate::AppState;

/// Admin overview of every entity plus received messages, newest first.
#[get("/dashboard")]
pub async fn dashboard_handler(
    session: AdminSession,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let projects = data.project.get_list.execute().await.map_err(|e| e.to_string());
    let skills = data.skill.get_list.execute().await.map_err(|e| e.to_string());
    let education_list = data
        .education
        .get_list
        .execute()
        .await
        .map_err(|e| e.to_string());
    let messages = data.contact.list.execute().await.map_err(|e| e.to_string());

    let (projects, skills, education_list, messages) =
        match (projects, skills, education_list, messages) {
            (Ok(p), Ok(s), Ok(e), Ok(m)) => (p, s, e, m),
            (p, s, e, m) => {
                let reason = [p.err(), s.err(), e.err(), m.err()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(user_id = %session.user_id, error = %reason, "Failed to load dashboard");
                return HtmlResponse::internal_error();
            }
        };

    let mut context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };
    context.insert("projects", &projects);
    context.insert("skills", &skills);
    context.insert("education_list", &education_list);
    context.insert("messages", &messages);

    pages.page("dashboard.html", context, &flashes)
}
