// src/shared/web/flash.rs
//! One-shot status messages carried across a redirect.
//!
//! The messages travel in a short-lived signed cookie; the page that renders
//! them also removes the cookie, so each message is shown exactly once.

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    http::header,
    web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use tracing::{debug, warn};

pub const FLASH_COOKIE: &str = "flash";

const FLASH_TOKEN_TYPE: &str = "flash";
const FLASH_TTL_SECONDS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FlashClaims {
    messages: Vec<FlashMessage>,
    exp: i64,
    token_type: String,
}

#[derive(Clone)]
pub struct FlashSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl FlashSigner {
    pub fn new(secret_key: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret_key.as_bytes()),
        }
    }

    pub fn sign(&self, messages: &[FlashMessage]) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = FlashClaims {
            messages: messages.to_vec(),
            exp: (Utc::now() + Duration::seconds(FLASH_TTL_SECONDS)).timestamp(),
            token_type: FLASH_TOKEN_TYPE.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Returns `None` for tampered, expired or foreign tokens.
    pub fn verify(&self, token: &str) -> Option<Vec<FlashMessage>> {
        let validation = Validation::new(Algorithm::HS256);

        match decode::<FlashClaims>(token, &self.decoding_key, &validation) {
            Ok(data) if data.claims.token_type == FLASH_TOKEN_TYPE => Some(data.claims.messages),
            Ok(_) => {
                warn!("Flash cookie carried a token of another type");
                None
            }
            Err(e) => {
                debug!("Discarding unreadable flash cookie: {}", e);
                None
            }
        }
    }
}

fn flash_cookie(token: String) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn flash_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// 303 redirect that leaves `message` for the next rendered page.
pub fn redirect_with_flash(
    location: &str,
    signer: &FlashSigner,
    message: FlashMessage,
) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location.to_string()));

    match signer.sign(&[message]) {
        Ok(token) => {
            builder.cookie(flash_cookie(token));
        }
        // The redirect still happens, only the notice is lost
        Err(e) => warn!("Failed to sign flash message: {}", e),
    }

    builder.finish()
}

/// Flash messages pending for the current request.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlashes {
    messages: Vec<FlashMessage>,
    cookie_present: bool,
}

impl IncomingFlashes {
    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// Adds a message raised while handling this very request.
    pub fn push(&mut self, message: FlashMessage) {
        self.messages.push(message);
    }

    pub fn needs_clearing(&self) -> bool {
        self.cookie_present
    }

    fn from_request_cookie(req: &HttpRequest) -> Self {
        let Some(cookie) = req.cookie(FLASH_COOKIE) else {
            return Self::default();
        };

        let messages = req
            .app_data::<web::Data<FlashSigner>>()
            .and_then(|signer| signer.verify(cookie.value()))
            .unwrap_or_default();

        Self {
            messages,
            cookie_present: true,
        }
    }
}

impl FromRequest for IncomingFlashes {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_request_cookie(req)))
    }
}
