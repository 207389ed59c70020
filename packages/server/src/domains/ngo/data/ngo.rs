use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::common::{AreaOfInterest, NgoId, ThemePreference};
use crate::domains::ngo::models::Ngo;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNgoRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub cnpj: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNgoRequest {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub theme_preference: Option<ThemePreference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NgoStats {
    pub id: NgoId,
    pub followers: usize,
    pub organized_events: usize,
    pub areas_of_work: BTreeSet<AreaOfInterest>,
    pub verified: bool,
    pub rating: f32,
    pub active: bool,
}

impl From<&Ngo> for NgoStats {
    fn from(ngo: &Ngo) -> Self {
        Self {
            id: ngo.id,
            followers: ngo.follower_count(),
            organized_events: ngo.organized_event_count(),
            areas_of_work: ngo.areas_of_work.clone(),
            verified: ngo.verified,
            rating: ngo.profile.rating,
            active: ngo.profile.active,
        }
    }
}
