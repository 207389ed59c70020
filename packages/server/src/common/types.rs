// Enumerations shared across domains.
//
// Every enum here serializes as its snake_case code and exposes a human
// readable description, which the system routes list as catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A closed set of values with stable codes and descriptions.
pub trait Catalog: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;

    fn description(&self) -> &'static str;
}

/// One `{ code, description }` row in a catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: String,
    pub description: String,
}

/// Lists every value of a catalog enum.
pub fn catalog<T: Catalog>() -> Vec<CatalogEntry> {
    T::ALL
        .iter()
        .map(|value| CatalogEntry {
            code: value.code().to_string(),
            description: value.description().to_string(),
        })
        .collect()
}

fn parse_code<T: Catalog>(s: &str, what: &str) -> Result<T, DomainError> {
    T::ALL
        .iter()
        .copied()
        .find(|value| value.code() == s)
        .ok_or_else(|| DomainError::Validation(format!("unknown {}: {}", what, s)))
}

macro_rules! catalog_display_from_str {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_code(s, $what)
            }
        }
    };
}

// ============================================================================
// Areas of interest
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaOfInterest {
    Education,
    Environment,
    Health,
    SocialAssistance,
    Culture,
    Sports,
    HumanRights,
    Technology,
    Animals,
    Elderly,
    Children,
}

impl Catalog for AreaOfInterest {
    const ALL: &'static [Self] = &[
        Self::Education,
        Self::Environment,
        Self::Health,
        Self::SocialAssistance,
        Self::Culture,
        Self::Sports,
        Self::HumanRights,
        Self::Technology,
        Self::Animals,
        Self::Elderly,
        Self::Children,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Environment => "environment",
            Self::Health => "health",
            Self::SocialAssistance => "social_assistance",
            Self::Culture => "culture",
            Self::Sports => "sports",
            Self::HumanRights => "human_rights",
            Self::Technology => "technology",
            Self::Animals => "animals",
            Self::Elderly => "elderly",
            Self::Children => "children",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Environment => "Environment",
            Self::Health => "Health",
            Self::SocialAssistance => "Social Assistance",
            Self::Culture => "Culture",
            Self::Sports => "Sports",
            Self::HumanRights => "Human Rights",
            Self::Technology => "Technology",
            Self::Animals => "Animal Protection",
            Self::Elderly => "Elderly Care",
            Self::Children => "Child Care",
        }
    }
}

catalog_display_from_str!(AreaOfInterest, "area of interest");

/// Body of the `POST .../areas` routes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AreaRequest {
    pub area: AreaOfInterest,
}

// ============================================================================
// Theme preference
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl Catalog for ThemePreference {
    const ALL: &'static [Self] = &[Self::Light, Self::Dark];

    fn code(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Light => "Light Theme",
            Self::Dark => "Dark Theme",
        }
    }
}

catalog_display_from_str!(ThemePreference, "theme preference");

// ============================================================================
// Event status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Planned,
    OpenForRegistration,
    RegistrationClosed,
    InProgress,
    Finished,
    Cancelled,
}

impl Catalog for EventStatus {
    const ALL: &'static [Self] = &[
        Self::Planned,
        Self::OpenForRegistration,
        Self::RegistrationClosed,
        Self::InProgress,
        Self::Finished,
        Self::Cancelled,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::OpenForRegistration => "open_for_registration",
            Self::RegistrationClosed => "registration_closed",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::OpenForRegistration => "Open for Registration",
            Self::RegistrationClosed => "Registration Closed",
            Self::InProgress => "In Progress",
            Self::Finished => "Finished",
            Self::Cancelled => "Cancelled",
        }
    }
}

catalog_display_from_str!(EventStatus, "event status");

// ============================================================================
// Notification kind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewRating,
    EventCreated,
    EventRegistration,
    EventCancelled,
    EventReminder,
    NewFollower,
    NewPost,
    PostLiked,
    PostCommented,
}

impl Catalog for NotificationKind {
    const ALL: &'static [Self] = &[
        Self::NewRating,
        Self::EventCreated,
        Self::EventRegistration,
        Self::EventCancelled,
        Self::EventReminder,
        Self::NewFollower,
        Self::NewPost,
        Self::PostLiked,
        Self::PostCommented,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::NewRating => "new_rating",
            Self::EventCreated => "event_created",
            Self::EventRegistration => "event_registration",
            Self::EventCancelled => "event_cancelled",
            Self::EventReminder => "event_reminder",
            Self::NewFollower => "new_follower",
            Self::NewPost => "new_post",
            Self::PostLiked => "post_liked",
            Self::PostCommented => "post_commented",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::NewRating => "New rating received",
            Self::EventCreated => "New event created",
            Self::EventRegistration => "Event registration",
            Self::EventCancelled => "Event cancelled",
            Self::EventReminder => "Event reminder",
            Self::NewFollower => "New follower",
            Self::NewPost => "New post",
            Self::PostLiked => "Post liked",
            Self::PostCommented => "New comment",
        }
    }
}

catalog_display_from_str!(NotificationKind, "notification kind");

// ============================================================================
// User kind
// ============================================================================

/// Which kind of account a user id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Volunteer,
    Ngo,
}

impl Catalog for UserKind {
    const ALL: &'static [Self] = &[Self::Volunteer, Self::Ngo];

    fn code(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Ngo => "ngo",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteer",
            Self::Ngo => "NGO",
        }
    }
}

catalog_display_from_str!(UserKind, "user kind");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_serde_representation() {
        for area in AreaOfInterest::ALL {
            let json = serde_json::to_string(area).unwrap();
            assert_eq!(json, format!("\"{}\"", area.code()));
        }
        for status in EventStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
        for kind in NotificationKind::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn parses_codes() {
        assert_eq!(
            "social_assistance".parse::<AreaOfInterest>().unwrap(),
            AreaOfInterest::SocialAssistance
        );
        assert_eq!("ngo".parse::<UserKind>().unwrap(), UserKind::Ngo);
        assert_eq!(
            "in_progress".parse::<EventStatus>().unwrap(),
            EventStatus::InProgress
        );
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "EDUCATION".parse::<AreaOfInterest>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn catalog_lists_every_value() {
        let areas = catalog::<AreaOfInterest>();
        assert_eq!(areas.len(), 11);
        assert_eq!(areas[9].code, "elderly");
        assert_eq!(areas[9].description, "Elderly Care");
        assert_eq!(catalog::<ThemePreference>().len(), 2);
        assert_eq!(catalog::<NotificationKind>().len(), 9);
    }
}
