mod dashboard;
mod home;
mod projects;

pub use dashboard::dashboard_handler;
pub use home::home_handler;
pub use projects::projects_handler;
