use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::common::profile::required;
use crate::common::time::now_naive;
use crate::common::{AreaOfInterest, DomainError, EventId, EventStatus, NgoId, VolunteerId};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// A time-bounded activity organized by an NGO.
///
/// Lifecycle:
///
/// ```text
/// planned -> open_for_registration -> registration_closed -> in_progress -> finished
///    \______________________\___________________\__________________\-> cancelled
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub ngo_id: NgoId,
    pub location: Option<String>,
    pub capacity: u32,
    pub occupied_slots: u32,
    pub status: EventStatus,
    pub related_areas: BTreeSet<AreaOfInterest>,
    pub enrolled_volunteers: HashSet<VolunteerId>,
    pub attended_volunteers: HashSet<VolunteerId>,
    pub created_at: DateTime<Utc>,
    pub cover_image: Option<String>,
}

impl Event {
    pub fn new(
        title: &str,
        description: &str,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
        ngo_id: NgoId,
        capacity: u32,
    ) -> Result<Self, DomainError> {
        let title = required("title", title)?;
        let description = required("description", description)?;
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::validation(format!(
                "title must be at most {} characters",
                MAX_TITLE_LEN
            )));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::validation(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        check_schedule(starts_at, ends_at)?;

        Ok(Self {
            id: EventId::new(),
            title,
            description,
            starts_at,
            ends_at,
            ngo_id,
            location: None,
            capacity,
            occupied_slots: 0,
            status: EventStatus::Planned,
            related_areas: BTreeSet::new(),
            enrolled_volunteers: HashSet::new(),
            attended_volunteers: HashSet::new(),
            created_at: Utc::now(),
            cover_image: None,
        })
    }

    // ------------------------------------------------------------------------
    // Status transitions
    // ------------------------------------------------------------------------

    pub fn open_registration(&mut self) -> Result<(), DomainError> {
        self.transition(EventStatus::Planned, EventStatus::OpenForRegistration)
    }

    pub fn close_registration(&mut self) -> Result<(), DomainError> {
        self.transition(
            EventStatus::OpenForRegistration,
            EventStatus::RegistrationClosed,
        )
    }

    pub fn start(&mut self) -> Result<(), DomainError> {
        self.transition(EventStatus::RegistrationClosed, EventStatus::InProgress)
    }

    pub fn finish(&mut self) -> Result<(), DomainError> {
        self.transition(EventStatus::InProgress, EventStatus::Finished)
    }

    /// Cancels the event from any state except `finished`.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.status {
            EventStatus::Finished => Err(DomainError::rule(
                "cannot cancel an event that has already finished",
            )),
            _ => {
                self.status = EventStatus::Cancelled;
                Ok(())
            }
        }
    }

    fn transition(&mut self, from: EventStatus, to: EventStatus) -> Result<(), DomainError> {
        if self.status != from {
            return Err(DomainError::rule(format!(
                "cannot move event from {} to {}; it must be {}",
                self.status, to, from
            )));
        }
        self.status = to;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Enrollment and attendance
    // ------------------------------------------------------------------------

    pub fn enroll(&mut self, volunteer_id: VolunteerId) -> Result<(), DomainError> {
        if !self.accepts_registrations() {
            return Err(DomainError::rule(format!(
                "event is not open for registration (status: {})",
                self.status
            )));
        }
        if !self.has_free_slots() {
            return Err(DomainError::rule("event is full"));
        }
        if !self.enrolled_volunteers.insert(volunteer_id) {
            return Err(DomainError::rule("volunteer is already enrolled"));
        }
        self.occupied_slots += 1;
        Ok(())
    }

    pub fn cancel_enrollment(&mut self, volunteer_id: VolunteerId) -> Result<(), DomainError> {
        if !self.enrolled_volunteers.remove(&volunteer_id) {
            return Err(DomainError::rule("volunteer is not enrolled in this event"));
        }
        self.occupied_slots = self.occupied_slots.saturating_sub(1);
        Ok(())
    }

    pub fn confirm_attendance(&mut self, volunteer_id: VolunteerId) -> Result<(), DomainError> {
        if !self.is_enrolled(volunteer_id) {
            return Err(DomainError::rule(
                "only enrolled volunteers can have attendance confirmed",
            ));
        }
        self.attended_volunteers.insert(volunteer_id);
        Ok(())
    }

    pub fn is_enrolled(&self, volunteer_id: VolunteerId) -> bool {
        self.enrolled_volunteers.contains(&volunteer_id)
    }

    pub fn has_attended(&self, volunteer_id: VolunteerId) -> bool {
        self.attended_volunteers.contains(&volunteer_id)
    }

    // ------------------------------------------------------------------------
    // Schedule and areas
    // ------------------------------------------------------------------------

    pub fn reschedule(
        &mut self,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> Result<(), DomainError> {
        if !matches!(
            self.status,
            EventStatus::Planned | EventStatus::OpenForRegistration
        ) {
            return Err(DomainError::rule(format!(
                "cannot reschedule an event that is {}",
                self.status
            )));
        }
        check_schedule(starts_at, ends_at)?;
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        Ok(())
    }

    pub fn add_area(&mut self, area: AreaOfInterest) {
        self.related_areas.insert(area);
    }

    // ------------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------------

    pub fn remaining_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied_slots)
    }

    pub fn has_free_slots(&self) -> bool {
        self.occupied_slots < self.capacity
    }

    pub fn accepts_registrations(&self) -> bool {
        self.status == EventStatus::OpenForRegistration
    }

    pub fn occupancy_rate(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.occupied_slots) / f64::from(self.capacity)
    }

    pub fn is_upcoming(&self) -> bool {
        self.is_upcoming_at(now_naive())
    }

    pub fn is_happening_now(&self) -> bool {
        self.is_happening_at(now_naive())
    }

    pub fn has_ended(&self) -> bool {
        self.has_ended_at(now_naive())
    }

    fn is_upcoming_at(&self, now: NaiveDateTime) -> bool {
        self.starts_at > now
    }

    fn is_happening_at(&self, now: NaiveDateTime) -> bool {
        now >= self.starts_at && now <= self.ends_at
    }

    fn has_ended_at(&self, now: NaiveDateTime) -> bool {
        now > self.ends_at
    }
}

fn check_schedule(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Result<(), DomainError> {
    if ends_at < starts_at {
        return Err(DomainError::validation(
            "ends_at cannot be before starts_at",
        ));
    }
    Ok(())
}
