mod create_education_service;
mod delete_education_service;
mod get_education_service;
mod get_single_education_service;
mod update_education_service;

pub use create_education_service::CreateEducationService;
pub use delete_education_service::DeleteEducationService;
pub use get_education_service::GetEducationService;
pub use get_single_education_service::GetSingleEducationService;
pub use update_education_service::UpdateEducationService;
