// src/shared/web/multipart.rs
use std::collections::HashMap;

use actix_web::{http::header, web, HttpRequest};

/// A file part of a multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Expected a multipart/form-data body")]
    NotMultipart,

    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Missing form field: {0}")]
    MissingField(&'static str),
}

/// Fully buffered `multipart/form-data` body.
///
/// Text parts land in `fields`, file parts in `files`. A file input left
/// empty by the browser (empty filename) is treated as absent.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn parse(req: &HttpRequest, body: web::Bytes) -> Result<Self, FormError> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .ok_or(FormError::NotMultipart)?;

        let boundary =
            multer::parse_boundary(content_type).map_err(|_| FormError::NotMultipart)?;

        Self::from_bytes(body, boundary).await
    }

    pub async fn from_bytes(body: web::Bytes, boundary: String) -> Result<Self, FormError> {
        let stream = futures::stream::once(async move { Ok::<web::Bytes, std::io::Error>(body) });
        let mut multipart = multer::Multipart::new(stream, boundary);
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| FormError::Malformed(e.to_string()))?
        {
            let name = match field.name() {
                Some(name) => name.to_string(),
                None => continue,
            };

            let file_name = field.file_name().map(str::to_string);

            match file_name {
                Some(file_name) => {
                    let content = field
                        .bytes()
                        .await
                        .map_err(|e| FormError::Malformed(e.to_string()))?;

                    if !file_name.is_empty() {
                        form.files.insert(
                            name,
                            UploadedFile {
                                file_name,
                                content: content.to_vec(),
                            },
                        );
                    }
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| FormError::Malformed(e.to_string()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Present-but-empty values are accepted; only a missing part is an error.
    pub fn required(&self, name: &'static str) -> Result<String, FormError> {
        self.fields
            .get(name)
            .cloned()
            .ok_or(FormError::MissingField(name))
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "XBOUNDARYX";

    fn body(parts: &[&str]) -> web::Bytes {
        let mut out = String::new();
        for part in parts {
            out.push_str(&format!("--{BOUNDARY}\r\n{part}\r\n"));
        }
        out.push_str(&format!("--{BOUNDARY}--\r\n"));
        web::Bytes::from(out)
    }

    #[tokio::test]
    async fn test_parses_text_and_file_parts() {
        let body = body(&[
            "Content-Disposition: form-data; name=\"title\"\r\n\r\nMy Project",
            "Content-Disposition: form-data; name=\"image_file\"; filename=\"shot.png\"\r\nContent-Type: image/png\r\n\r\nPNGDATA",
        ]);

        let mut form = MultipartForm::from_bytes(body, BOUNDARY.to_string())
            .await
            .unwrap();

        assert_eq!(form.required("title").unwrap(), "My Project");
        let file = form.take_file("image_file").unwrap();
        assert_eq!(file.file_name, "shot.png");
        assert_eq!(file.content, b"PNGDATA".to_vec());
    }

    #[tokio::test]
    async fn test_empty_file_input_is_absent() {
        let body = body(&[
            "Content-Disposition: form-data; name=\"image_file\"; filename=\"\"\r\nContent-Type: application/octet-stream\r\n\r\n",
        ]);

        let mut form = MultipartForm::from_bytes(body, BOUNDARY.to_string())
            .await
            .unwrap();

        assert!(form.take_file("image_file").is_none());
    }

    #[tokio::test]
    async fn test_missing_and_empty_fields() {
        let body = body(&["Content-Disposition: form-data; name=\"title\"\r\n\r\n"]);

        let form = MultipartForm::from_bytes(body, BOUNDARY.to_string())
            .await
            .unwrap();

        assert_eq!(form.required("title").unwrap(), "");
        assert_eq!(
            form.required("description"),
            Err(FormError::MissingField("description"))
        );
        assert_eq!(form.optional("link"), None);
    }

    #[actix_web::test]
    async fn test_parse_rejects_urlencoded_request() {
        let req = actix_web::test::TestRequest::post()
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .to_http_request();

        let res = MultipartForm::parse(&req, web::Bytes::from_static(b"title=x")).await;
        assert!(matches!(res, Err(FormError::NotMultipart)));
    }
}
