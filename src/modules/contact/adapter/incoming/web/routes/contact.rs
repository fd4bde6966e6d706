use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::contact::application::ports::incoming::use_cases::SubmitMessageCommand;
use crate::shared::web::{
    layout_context, redirect_with_flash, FlashMessage, FlashSigner, HtmlResponse,
    IncomingFlashes, PageRenderer,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[get("/contact")]
pub async fn contact_page_handler(
    session: Option<AdminSession>,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    match layout_context(&data, session.as_ref()).await {
        Ok(context) => pages.page("contact.html", context, &flashes),
        Err(resp) => resp,
    }
}

#[post("/contact")]
pub async fn submit_message_handler(
    form: web::Form<ContactForm>,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    let form = form.into_inner();
    let command = SubmitMessageCommand {
        name: form.name,
        email: form.email,
        message: form.message,
    };

    match data.contact.submit.execute(command).await {
        Ok(message) => {
            info!(message_id = message.id, "Contact message received");
            redirect_with_flash(
                "/contact",
                &flash,
                FlashMessage::success("Your message has been sent!"),
            )
        }
        Err(e) => {
            error!(error = %e, "Failed to store contact message");
            HtmlResponse::internal_error()
        }
    }
}
