// src/shared/web/templates.rs
use std::sync::Arc;

use actix_web::HttpResponse;
use tera::{Context, Tera};
use tracing::error;

use crate::shared::web::flash::{flash_removal_cookie, IncomingFlashes};
use crate::shared::web::HtmlResponse;

#[derive(Clone)]
pub struct PageRenderer {
    tera: Arc<Tera>,
}

impl PageRenderer {
    /// Loads every `*.html` file below `template_dir`.
    pub fn from_dir(template_dir: &str) -> Result<Self, tera::Error> {
        let glob = format!("{}/**/*.html", template_dir.trim_end_matches('/'));
        let tera = Tera::new(&glob)?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(template, context)
    }

    /// Renders a full page, consuming any pending flash messages.
    pub fn page(
        &self,
        template: &str,
        mut context: Context,
        flashes: &IncomingFlashes,
    ) -> HttpResponse {
        context.insert("flashes", flashes.messages());

        match self.render(template, &context) {
            Ok(html) => {
                let mut builder = HttpResponse::Ok();
                builder.content_type("text/html; charset=utf-8");
                if flashes.needs_clearing() {
                    builder.cookie(flash_removal_cookie());
                }
                builder.body(html)
            }
            Err(e) => {
                error!(template, error = ?e, "Template rendering failed");
                HtmlResponse::internal_error()
            }
        }
    }
}
