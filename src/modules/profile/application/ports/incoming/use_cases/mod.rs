mod ensure_profile;
mod get_profile;
mod update_profile;

pub use ensure_profile::{EnsureProfileError, EnsureProfileUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use update_profile::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
