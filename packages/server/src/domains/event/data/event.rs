use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::common::{AreaOfInterest, EventId, EventStatus, NgoId};
use crate::domains::event::models::Event;

/// Schedule fields are ISO local date-times, e.g. `2025-03-01T09:30:00`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub starts_at: String,
    pub ends_at: String,
    pub ngo_id: NgoId,
    pub location: Option<String>,
    pub capacity: u32,
    pub cover_image: Option<String>,
}

/// `starts_at` and `ends_at` must be sent together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventStats {
    pub id: EventId,
    pub status: EventStatus,
    pub capacity: u32,
    pub occupied_slots: u32,
    pub remaining_slots: u32,
    pub occupancy_rate: f64,
    pub enrolled: usize,
    pub attended: usize,
    pub accepts_registrations: bool,
    pub is_upcoming: bool,
    pub is_happening_now: bool,
    pub has_ended: bool,
    pub related_areas: BTreeSet<AreaOfInterest>,
}

impl From<&Event> for EventStats {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            status: event.status,
            capacity: event.capacity,
            occupied_slots: event.occupied_slots,
            remaining_slots: event.remaining_slots(),
            occupancy_rate: event.occupancy_rate(),
            enrolled: event.enrolled_volunteers.len(),
            attended: event.attended_volunteers.len(),
            accepts_registrations: event.accepts_registrations(),
            is_upcoming: event.is_upcoming(),
            is_happening_now: event.is_happening_now(),
            has_ended: event.has_ended(),
            related_areas: event.related_areas.clone(),
        }
    }
}
