pub mod education;
