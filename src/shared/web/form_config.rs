// src/shared/web/form_config.rs
use crate::shared::web::HtmlResponse;
use actix_web::web::FormConfig;

pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(err, HtmlResponse::bad_request(&message))
            .into()
    })
}
