pub mod content;
pub mod seed_orchestrator;

pub use seed_orchestrator::{AdminCredentials, SeedError, SeedOrchestrator, SeedReport};
