mod create_skill;
mod delete_skill;
mod get_single_skill;
mod get_skills;
mod update_skill;

pub use create_skill::{CreateSkillCommand, CreateSkillError, CreateSkillUseCase};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase};
pub use get_single_skill::{GetSingleSkillError, GetSingleSkillUseCase};
pub use get_skills::{GetSkillsError, GetSkillsUseCase};
pub use update_skill::{UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase};
