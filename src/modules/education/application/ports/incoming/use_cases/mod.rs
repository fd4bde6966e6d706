mod create_education;
mod delete_education;
mod get_education;
mod get_single_education;
mod update_education;

pub use create_education::{CreateEducationError, CreateEducationUseCase};
pub use delete_education::{DeleteEducationError, DeleteEducationUseCase};
pub use get_education::{GetEducationError, GetEducationUseCase};
pub use get_single_education::{GetSingleEducationError, GetSingleEducationUseCase};
pub use update_education::{UpdateEducationError, UpdateEducationUseCase};
