pub mod auth;
pub mod contact;
pub mod education;
pub mod media;
pub mod profile;
pub mod project;
pub mod seed;
pub mod site;
pub mod skill;
