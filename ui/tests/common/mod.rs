#![allow(dead_code)]

use seomaster_ui::api::MockBackend;
use seomaster_ui::config::AppConfig;
use seomaster_ui::types::UserProfile;
use seomaster_ui::validation::FormData;
use seomaster_ui::wizard::{ExperienceLevel, TargetInfoDraft};

pub const ADMIN_EMAIL: &str = "admin@seomaster.pro";

pub fn test_config() -> AppConfig {
    AppConfig {
        admin_email: ADMIN_EMAIL.to_string(),
        ..AppConfig::default()
    }
}

/// Mock backend that answers without waiting.
pub fn backend() -> MockBackend {
    MockBackend::instant(&test_config())
}

pub fn jane() -> UserProfile {
    UserProfile {
        id: "u-1".to_string(),
        email: "jane@example.com".to_string(),
        name: "Jane Doe".to_string(),
    }
}

pub fn sign_up_form() -> FormData {
    FormData::new()
        .with_text("username", "jane_doe")
        .with_text("fullName", "Jane Doe")
        .with_text("email", "jane@example.com")
        .with_text("contact", "")
        .with_text("password", "secret1")
        .with_text("confirmPassword", "secret1")
        .with_text("hearAboutUs", "google")
        .with_text("referralCode", "")
}

pub fn complete_draft() -> TargetInfoDraft {
    TargetInfoDraft {
        target_role: "Senior Software Engineer".to_string(),
        location: "San Francisco, CA".to_string(),
        industry: "Technology".to_string(),
        experience_level: Some(ExperienceLevel::Senior),
        target_skills: "Rust, Distributed Systems".to_string(),
        ..TargetInfoDraft::default()
    }
}
