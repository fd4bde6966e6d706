pub mod education_query;
pub mod education_repository;

pub use education_query::{EducationQuery, EducationQueryError};
pub use education_repository::{EducationData, EducationRepository, EducationRepositoryError};
