pub mod entities;
pub mod filename;
pub mod policies;
