use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::common::{AreaOfInterest, ThemePreference, VolunteerId};
use crate::domains::volunteer::models::Volunteer;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVolunteerRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub about: Option<String>,
}

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVolunteerRequest {
    pub full_name: Option<String>,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub theme_preference: Option<ThemePreference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolunteerStats {
    pub id: VolunteerId,
    pub events_attended: usize,
    pub followed_ngos: usize,
    pub favorite_events: usize,
    pub areas_of_interest: BTreeSet<AreaOfInterest>,
    pub rating: f32,
    pub active: bool,
}

impl From<&Volunteer> for VolunteerStats {
    fn from(volunteer: &Volunteer) -> Self {
        Self {
            id: volunteer.id,
            events_attended: volunteer.events_attended_count(),
            followed_ngos: volunteer.followed_ngos.len(),
            favorite_events: volunteer.favorite_events.len(),
            areas_of_interest: volunteer.areas_of_interest.clone(),
            rating: volunteer.profile.rating,
            active: volunteer.profile.active,
        }
    }
}
