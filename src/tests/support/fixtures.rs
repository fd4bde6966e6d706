use chrono::{Duration, TimeZone, Utc};

use crate::contact::application::domain::entities::Message;
use crate::education::application::domain::entities::Education;
use crate::profile::application::domain::entities::{Profile, PROFILE_ID};
use crate::project::application::domain::entities::Project;
use crate::skill::application::domain::entities::Skill;

pub fn sample_project(id: i32) -> Project {
    Project {
        id,
        title: format!("Sample project {id}"),
        description: format!("Description of project {id}"),
        image_file: "default.jpg".to_string(),
        link: Some(format!("https://example.com/project-{id}")),
    }
}

pub fn sample_skill(id: i32) -> Skill {
    Skill {
        id,
        name: format!("Sample skill {id}"),
        description: Some(format!("What skill {id} covers")),
        image_file: "default.jpg".to_string(),
    }
}

pub fn sample_education(id: i32) -> Education {
    Education {
        id,
        degree: format!("Degree {id}"),
        institution: format!("Sample institution {id}"),
        year: "2016 - 2020".to_string(),
        description: None,
    }
}

pub fn sample_profile() -> Profile {
    Profile {
        id: PROFILE_ID,
        name: "Ada Lovelace".to_string(),
        bio: "Analyst and metaphysician".to_string(),
        phone: None,
        email: Some("ada@example.com".to_string()),
        residence: Some("London".to_string()),
        image_file: "profile.jpg".to_string(),
    }
}

/// Later ids are posted later.
pub fn sample_message(id: i32, text: &str) -> Message {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    Message {
        id,
        name: format!("Visitor {id}"),
        email: format!("visitor{id}@example.com"),
        message: text.to_string(),
        date_posted: base + Duration::minutes(id as i64),
    }
}
