//! Shared wiring for handler tests: app data, a signed admin session and
//! hand-built multipart bodies.
use std::sync::Arc;

use actix_web::{cookie::Cookie, dev::ServiceResponse, test, web};

use crate::auth::adapter::incoming::web::extractors::auth::session_cookie;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService, DEFAULT_ISSUER};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::shared::web::form_config::custom_form_config;
use crate::shared::web::{FlashSigner, PageRenderer};
use crate::AppState;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

const BOUNDARY: &str = "----portfolio-test-boundary";

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: DEFAULT_ISSUER.to_string(),
        session_expiry: 3600,
    })
}

/// Registers everything the handlers pull out of app data.
pub fn test_services(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());
        let pages = PageRenderer::from_dir("templates").expect("templates should parse");

        cfg.app_data(web::Data::new(state))
            .app_data(web::Data::new(token_provider))
            .app_data(web::Data::new(FlashSigner::new(TEST_SECRET)))
            .app_data(web::Data::new(pages))
            .app_data(custom_form_config());
    }
}

/// A session cookie the test token service accepts.
pub fn admin_cookie() -> Cookie<'static> {
    let token = test_token_service()
        .generate_session_token(UserId::from(1))
        .expect("session token");
    session_cookie(token, 3600)
}

/// `multipart/form-data` body with the given text fields and at most one file
/// part as `(field, filename, bytes)`. Returns the content type and the body.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((name, file_name, content)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub async fn read_html(resp: ServiceResponse) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
