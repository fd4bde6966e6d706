pub mod skill_query;
pub mod skill_repository;

pub use skill_query::{SkillQuery, SkillQueryError};
pub use skill_repository::{CreateSkillData, SkillRepository, SkillRepositoryError, UpdateSkillData};
