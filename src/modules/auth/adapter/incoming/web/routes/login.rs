use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::{session_cookie, AdminSession};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::web::{layout_context, FlashMessage, HtmlResponse, IncomingFlashes, PageRenderer};
use crate::AppState;

pub const LOGIN_FAILED_MESSAGE: &str = "Login Unsuccessful. Please check username and password";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[get("/login")]
pub async fn login_page_handler(
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    session: Option<AdminSession>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    match layout_context(&data, session.as_ref()).await {
        Ok(context) => pages.page("login.html", context, &flashes),
        Err(resp) => resp,
    }
}

#[post("/login")]
pub async fn login_handler(
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    session: Option<AdminSession>,
    mut flashes: IncomingFlashes,
) -> HttpResponse {
    let form = form.into_inner();
    info!(username = %form.username, "Login attempt");

    let request = LoginRequest::new(form.username, form.password);

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                username = %response.user.username,
                "Admin logged in"
            );

            HttpResponse::SeeOther()
                .insert_header((actix_web::http::header::LOCATION, "/dashboard"))
                .cookie(session_cookie(response.session_token, response.expires_in))
                .finish()
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            flashes.push(FlashMessage::danger(LOGIN_FAILED_MESSAGE));

            match layout_context(&data, session.as_ref()).await {
                Ok(context) => pages.page("login.html", context, &flashes),
                Err(resp) => resp,
            }
        }

        Err(e) => {
            error!(error = %e, "Login could not be completed");
            HtmlResponse::internal_error()
        }
    }
}
