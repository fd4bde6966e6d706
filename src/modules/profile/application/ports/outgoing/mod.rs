pub mod profile_repository;

pub use profile_repository::{
    NewProfileData, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};
