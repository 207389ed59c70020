use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::types::ThemePreference;

pub const MIN_SCORE: f32 = 1.0;
pub const MAX_SCORE: f32 = 5.0;

/// Account fields shared by volunteers and NGOs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub full_name: String,
    pub profile_photo: Option<String>,
    /// Average score received, 0.0 until the first rating arrives.
    pub rating: f32,
    pub about: Option<String>,
    pub theme_preference: ThemePreference,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl UserProfile {
    pub fn new(email: &str, password: &str, full_name: &str) -> Result<Self, DomainError> {
        let email = required("email", email)?;
        let password = required("password", password)?;
        let full_name = required("full_name", full_name)?;

        if !email.contains('@') {
            return Err(DomainError::validation(format!("invalid email: {}", email)));
        }

        Ok(Self {
            email,
            password,
            full_name,
            profile_photo: None,
            rating: 0.0,
            about: None,
            theme_preference: ThemePreference::default(),
            created_at: Utc::now(),
            active: true,
        })
    }

    pub fn set_rating(&mut self, rating: f32) -> Result<(), DomainError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&rating) {
            return Err(DomainError::validation(format!(
                "rating must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }
        self.rating = rating;
        Ok(())
    }

    pub fn reset_rating(&mut self) {
        self.rating = 0.0;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }
}

/// Trims a required text field, rejecting blank values.
pub fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("ana@example.org", "secret", "Ana Souza").unwrap()
    }

    #[test]
    fn starts_active_with_defaults() {
        let p = profile();
        assert!(p.active);
        assert_eq!(p.rating, 0.0);
        assert_eq!(p.theme_preference, ThemePreference::Light);
    }

    #[test]
    fn requires_fields() {
        assert!(UserProfile::new(" ", "x", "Ana").is_err());
        assert!(UserProfile::new("a@b.c", "", "Ana").is_err());
        assert!(UserProfile::new("a@b.c", "x", "").is_err());
        assert!(UserProfile::new("no-at-sign", "x", "Ana").is_err());
    }

    #[test]
    fn rating_must_be_in_range() {
        let mut p = profile();
        assert!(p.set_rating(0.5).is_err());
        assert!(p.set_rating(5.1).is_err());
        p.set_rating(4.5).unwrap();
        assert_eq!(p.rating, 4.5);
        p.reset_rating();
        assert_eq!(p.rating, 0.0);
    }

    #[test]
    fn password_is_never_serialized() {
        let json = serde_json::to_value(profile()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ana@example.org");
    }
}
