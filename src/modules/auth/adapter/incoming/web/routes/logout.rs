use actix_web::{get, http::header, HttpResponse};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::{
    session_removal_cookie, AdminSession,
};

#[get("/logout")]
pub async fn logout_handler(session: AdminSession) -> HttpResponse {
    info!(user_id = %session.user_id, "Admin logged out");

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(session_removal_cookie())
        .finish()
}
