use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::HashSet;

use crate::common::{AreaOfInterest, DomainError, EventId, NgoId, UserProfile, VolunteerId};

/// A person who enrolls in events, follows NGOs, posts and rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: VolunteerId,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub areas_of_interest: BTreeSet<AreaOfInterest>,
    /// Events attended, in the order attendance was confirmed.
    pub event_history: Vec<EventId>,
    pub followed_ngos: HashSet<NgoId>,
    pub favorite_events: HashSet<EventId>,
}

impl Volunteer {
    pub fn new(email: &str, password: &str, full_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: VolunteerId::new(),
            profile: UserProfile::new(email, password, full_name)?,
            areas_of_interest: BTreeSet::new(),
            event_history: Vec::new(),
            followed_ngos: HashSet::new(),
            favorite_events: HashSet::new(),
        })
    }

    pub fn add_area(&mut self, area: AreaOfInterest) {
        self.areas_of_interest.insert(area);
    }

    pub fn remove_area(&mut self, area: AreaOfInterest) {
        self.areas_of_interest.remove(&area);
    }

    pub fn is_interested_in(&self, area: AreaOfInterest) -> bool {
        self.areas_of_interest.contains(&area)
    }

    /// Records an attended event. Recording the same event twice is a no-op.
    pub fn record_event(&mut self, event_id: EventId) {
        if !self.event_history.contains(&event_id) {
            self.event_history.push(event_id);
        }
    }

    pub fn has_attended(&self, event_id: EventId) -> bool {
        self.event_history.contains(&event_id)
    }

    pub fn events_attended_count(&self) -> usize {
        self.event_history.len()
    }

    /// Returns `true` if the NGO was not already followed.
    pub fn follow(&mut self, ngo_id: NgoId) -> bool {
        self.followed_ngos.insert(ngo_id)
    }

    /// Returns `true` if the NGO was being followed.
    pub fn unfollow(&mut self, ngo_id: NgoId) -> bool {
        self.followed_ngos.remove(&ngo_id)
    }

    pub fn is_following(&self, ngo_id: NgoId) -> bool {
        self.followed_ngos.contains(&ngo_id)
    }

    pub fn favorite(&mut self, event_id: EventId) {
        self.favorite_events.insert(event_id);
    }

    pub fn unfavorite(&mut self, event_id: EventId) {
        self.favorite_events.remove(&event_id);
    }

    pub fn has_favorited(&self, event_id: EventId) -> bool {
        self.favorite_events.contains(&event_id)
    }
}
