use actix_web::{get, post, web, HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::media::application::domain::entities::ImageUpload;
use crate::profile::application::ports::incoming::use_cases::UpdateProfileCommand;
use crate::shared::web::{
    item_form_context, layout_context, redirect_with_flash, FlashMessage, FlashSigner, FormError,
    HtmlResponse, IncomingFlashes, MultipartForm, PageRenderer,
};
use crate::AppState;

async fn parse_profile_form(
    req: &HttpRequest,
    body: web::Bytes,
) -> Result<UpdateProfileCommand, FormError> {
    let mut form = MultipartForm::parse(req, body).await?;

    Ok(UpdateProfileCommand {
        name: form.required("name")?,
        bio: form.required("bio")?,
        phone: form.optional("phone"),
        email: form.optional("email"),
        residence: form.optional("residence"),
        image: form.take_file("image_file").map(ImageUpload::from),
    })
}

#[get("/profile/edit")]
pub async fn edit_profile_page_handler(
    session: AdminSession,
    data: web::Data<AppState>,
    pages: web::Data<PageRenderer>,
    flashes: IncomingFlashes,
) -> HttpResponse {
    let profile = match data.profile.ensure.execute().await {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "Failed to load profile");
            return HtmlResponse::internal_error();
        }
    };

    let context = match layout_context(&data, Some(&session)).await {
        Ok(context) => context,
        Err(resp) => return resp,
    };

    let context = item_form_context(
        context,
        "profile",
        "Edit Profile",
        "/profile/edit",
        Some(&profile),
    );
    pages.page("edit_item.html", context, &flashes)
}

#[post("/profile/edit")]
pub async fn update_profile_handler(
    _session: AdminSession,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
    flash: web::Data<FlashSigner>,
) -> HttpResponse {
    if let Err(e) = data.profile.ensure.execute().await {
        error!(error = %e, "Failed to load profile");
        return HtmlResponse::internal_error();
    }

    let command = match parse_profile_form(&req, body).await {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, "Rejected profile form");
            return HtmlResponse::bad_request(&e.to_string());
        }
    };

    match data.profile.update.execute(command).await {
        Ok(profile) => {
            info!(image = %profile.image_file, "Profile updated");
            redirect_with_flash("/dashboard", &flash, FlashMessage::success("Profile updated!"))
        }
        Err(e) => {
            error!(error = %e, "Failed to update profile");
            HtmlResponse::internal_error()
        }
    }
}
