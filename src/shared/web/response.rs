// src/shared/web/response.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};

/// HTML counterparts of the JSON envelope used by API-style services.
pub struct HtmlResponse;

impl HtmlResponse {
    pub fn ok(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)
    }

    /// 303 so that a redirected POST is followed by a GET
    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location.to_string()))
            .finish()
    }

    pub fn error(status: StatusCode, title: &str, message: &str) -> HttpResponse {
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} {title}</title></head>\n<body>\n<h1>{code} {title}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to home</a></p>\n</body>\n</html>\n",
            code = status.as_u16(),
            title = tera::escape_html(title),
            message = tera::escape_html(message),
        );

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body)
    }

    pub fn not_found() -> HttpResponse {
        Self::error(
            StatusCode::NOT_FOUND,
            "Not Found",
            "The requested item does not exist.",
        )
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred",
        )
    }
}
