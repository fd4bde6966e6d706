use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::Payload,
    web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::web::HtmlResponse;

pub const SESSION_COOKIE: &str = "session";

/// The logged-in administrator.
///
/// Guarded handlers take this as an argument; visitors without a valid
/// session cookie are sent to the login page instead.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user_id: UserId,
}

fn reject(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => return ready(Err(reject(HtmlResponse::internal_error()))),
        };

        let Some(cookie) = req.cookie(SESSION_COOKIE) else {
            return ready(Err(reject(HtmlResponse::redirect("/login"))));
        };

        match token_provider.verify_session_token(cookie.value()) {
            Ok(user_id) => ready(Ok(AdminSession { user_id })),
            Err(e) => {
                debug!("Session cookie rejected: {}", e);
                ready(Err(reject(HtmlResponse::redirect("/login"))))
            }
        }
    }
}

pub fn session_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}

pub fn session_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use actix_web::{http::header, test::TestRequest};

    fn provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "portfolio_cms".to_string(),
            session_expiry: 3600,
        }))
    }

    fn redirect_target(err: ActixError) -> Option<String> {
        let resp = err.error_response();
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[actix_web::test]
    async fn test_valid_cookie_yields_session() {
        let provider = provider();
        let token = provider.generate_session_token(UserId::from(1)).unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(provider))
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_http_request();

        let session = AdminSession::extract(&req).await.unwrap();
        assert_eq!(session.user_id, UserId::from(1));
    }

    #[actix_web::test]
    async fn test_missing_cookie_redirects_to_login() {
        let req = TestRequest::default()
            .app_data(web::Data::new(provider()))
            .to_http_request();

        let err = AdminSession::extract(&req).await.unwrap_err();
        assert_eq!(redirect_target(err).as_deref(), Some("/login"));
    }

    #[actix_web::test]
    async fn test_tampered_cookie_redirects_to_login() {
        let req = TestRequest::default()
            .app_data(web::Data::new(provider()))
            .cookie(Cookie::new(SESSION_COOKIE, "forged.token.value"))
            .to_http_request();

        let err = AdminSession::extract(&req).await.unwrap_err();
        assert_eq!(redirect_target(err).as_deref(), Some("/login"));
    }

    #[actix_web::test]
    async fn test_optional_session_is_none_without_cookie() {
        let req = TestRequest::default()
            .app_data(web::Data::new(provider()))
            .to_http_request();

        let session = Option::<AdminSession>::extract(&req).await.unwrap();
        assert!(session.is_none());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), 43200);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(43200)));
    }
}
