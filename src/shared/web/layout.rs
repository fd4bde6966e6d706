// src/shared/web/layout.rs
use actix_web::HttpResponse;
use serde::Serialize;
use tera::Context;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::web::HtmlResponse;
use crate::AppState;

/// Context shared by every page: the site profile (if any) and whether the
/// visitor holds an admin session.
pub async fn layout_context(
    data: &AppState,
    session: Option<&AdminSession>,
) -> Result<Context, HttpResponse> {
    let profile = data.profile.get.execute().await.map_err(|e| {
        error!("Failed to load profile for layout: {}", e);
        HtmlResponse::internal_error()
    })?;

    let mut context = Context::new();
    context.insert("profile", &profile);
    context.insert("logged_in", &session.is_some());
    Ok(context)
}

/// Context for the shared create/edit form.
///
/// `item` is absent on create pages; the template then renders empty inputs.
pub fn item_form_context<T: Serialize>(
    mut context: Context,
    item_type: &str,
    legend: &str,
    action: &str,
    item: Option<&T>,
) -> Context {
    context.insert("item_type", item_type);
    context.insert("legend", legend);
    context.insert("action", action);
    if let Some(item) = item {
        context.insert("item", item);
    }
    context
}
