use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::common::{AreaOfInterest, DomainError, EventId, NgoId, UserProfile, VolunteerId};

/// An organization that runs events and is followed by volunteers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ngo {
    pub id: NgoId,
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Brazilian company registry number.
    pub cnpj: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub areas_of_work: BTreeSet<AreaOfInterest>,
    pub organized_events: Vec<EventId>,
    pub followers: HashSet<VolunteerId>,
    pub verified: bool,
}

impl Ngo {
    pub fn new(email: &str, password: &str, full_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: NgoId::new(),
            profile: UserProfile::new(email, password, full_name)?,
            cnpj: None,
            address: None,
            phone: None,
            areas_of_work: BTreeSet::new(),
            organized_events: Vec::new(),
            followers: HashSet::new(),
            verified: false,
        })
    }

    pub fn add_area(&mut self, area: AreaOfInterest) {
        self.areas_of_work.insert(area);
    }

    pub fn remove_area(&mut self, area: AreaOfInterest) {
        self.areas_of_work.remove(&area);
    }

    pub fn works_in_area(&self, area: AreaOfInterest) -> bool {
        self.areas_of_work.contains(&area)
    }

    pub fn record_event(&mut self, event_id: EventId) {
        if !self.organized_events.contains(&event_id) {
            self.organized_events.push(event_id);
        }
    }

    pub fn organizes(&self, event_id: EventId) -> bool {
        self.organized_events.contains(&event_id)
    }

    pub fn add_follower(&mut self, volunteer_id: VolunteerId) -> bool {
        self.followers.insert(volunteer_id)
    }

    pub fn remove_follower(&mut self, volunteer_id: VolunteerId) -> bool {
        self.followers.remove(&volunteer_id)
    }

    pub fn has_follower(&self, volunteer_id: VolunteerId) -> bool {
        self.followers.contains(&volunteer_id)
    }

    pub fn verify(&mut self) {
        self.verified = true;
    }

    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    pub fn organized_event_count(&self) -> usize {
        self.organized_events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ngo() -> Ngo {
        Ngo::new("contato@verde.org", "pw", "Instituto Verde").unwrap()
    }

    #[test]
    fn starts_unverified() {
        let mut n = ngo();
        assert!(!n.verified);
        n.verify();
        assert!(n.verified);
    }

    #[test]
    fn followers() {
        let mut n = ngo();
        let v = VolunteerId::new();
        assert!(n.add_follower(v));
        assert!(!n.add_follower(v));
        assert_eq!(n.follower_count(), 1);
        assert!(n.has_follower(v));
        assert!(n.remove_follower(v));
        assert_eq!(n.follower_count(), 0);
    }

    #[test]
    fn organized_events_are_unique() {
        let mut n = ngo();
        let e = EventId::new();
        n.record_event(e);
        n.record_event(e);
        assert_eq!(n.organized_event_count(), 1);
        assert!(n.organizes(e));
    }

    #[test]
    fn areas_of_work() {
        let mut n = ngo();
        n.add_area(AreaOfInterest::Environment);
        assert!(n.works_in_area(AreaOfInterest::Environment));
        n.remove_area(AreaOfInterest::Environment);
        assert!(!n.works_in_area(AreaOfInterest::Environment));
    }
}
