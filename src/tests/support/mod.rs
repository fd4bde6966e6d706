pub mod app_state_builder;
pub mod fixtures;
pub mod mocks;
pub mod sqlite;
pub mod stubs;
pub mod web;
