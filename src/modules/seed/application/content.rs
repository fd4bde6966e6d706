//! Sample rows written by the seed routine on an empty database.

use crate::education::application::ports::outgoing::EducationData;
use crate::profile::application::ports::outgoing::NewProfileData;
use crate::project::application::ports::outgoing::CreateProjectData;
use crate::skill::application::ports::outgoing::CreateSkillData;

pub fn profile() -> NewProfileData {
    NewProfileData {
        name: "Portfolio Owner".to_string(),
        bio: "Software developer building web services and tooling. Open to collaboration on backend and infrastructure work.".to_string(),
        phone: Some("+1 555 0100".to_string()),
        email: Some("owner@example.com".to_string()),
        residence: Some("Remote".to_string()),
        image_file: "profile.jpg".to_string(),
    }
}

pub fn education() -> EducationData {
    EducationData {
        degree: "Bachelor of Science in Computer Science".to_string(),
        institution: "State University".to_string(),
        year: "2018 - 2022".to_string(),
        description: Some("Focus on distributed systems".to_string()),
    }
}

pub fn skills() -> Vec<CreateSkillData> {
    [
        ("Rust", "Systems Programming", "rust.png"),
        ("Python", "Programming Language", "python.png"),
        ("JavaScript", "Web Development", "js.png"),
        ("PostgreSQL", "Database", "postgres.png"),
        ("Docker", "Containers", "docker.png"),
        ("Git & GitHub", "Version Control", "git.png"),
    ]
    .into_iter()
    .map(|(name, description, image_file)| CreateSkillData {
        name: name.to_string(),
        description: Some(description.to_string()),
        image_file: image_file.to_string(),
    })
    .collect()
}

pub fn projects() -> Vec<CreateProjectData> {
    [
        (
            "School Management System",
            "Web-based system for managing students, staff, and academic records.",
            "school_sys.jpg",
        ),
        (
            "Class Schedule App",
            "Mobile app for managing class schedules and reminders.",
            "schedule_app.jpg",
        ),
        (
            "Personal Portfolio Website",
            "This site: a small CMS with an admin dashboard.",
            "portfolio.jpg",
        ),
    ]
    .into_iter()
    .map(|(title, description, image_file)| CreateProjectData {
        title: title.to_string(),
        description: description.to_string(),
        image_file: image_file.to_string(),
        link: Some("#".to_string()),
    })
    .collect()
}
