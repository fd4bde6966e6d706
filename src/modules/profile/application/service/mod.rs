mod ensure_profile_service;
mod get_profile_service;
mod update_profile_service;

pub use ensure_profile_service::EnsureProfileService;
pub use get_profile_service::GetProfileService;
pub use update_profile_service::UpdateProfileService;
