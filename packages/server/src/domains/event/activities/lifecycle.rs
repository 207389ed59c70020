//! Event operations that reach beyond the event itself.

use tracing::info;
use uuid::Uuid;

use crate::common::time::parse_naive;
use crate::common::{DomainError, EventId, VolunteerId};
use crate::domains::event::data::{CreateEventRequest, UpdateEventRequest};
use crate::domains::event::models::Event;
use crate::domains::notification::activities::{
    notify_event_cancelled, notify_event_registration, notify_new_event,
};
use crate::kernel::store::update;
use crate::kernel::Store;

/// Stores a new event, records it with its NGO and tells the NGO's followers.
pub fn create_event(store: &Store, request: CreateEventRequest) -> Result<Event, DomainError> {
    let starts_at = parse_naive("starts_at", &request.starts_at)?;
    let ends_at = parse_naive("ends_at", &request.ends_at)?;

    let mut event = Event::new(
        &request.title,
        &request.description,
        starts_at,
        ends_at,
        request.ngo_id,
        request.capacity,
    )?;
    event.location = request.location;
    event.cover_image = request.cover_image;
    store.events.insert(event.id, event.clone());

    let followers: Option<Vec<Uuid>> = store.ngos.get_mut(&event.ngo_id).map(|mut ngo| {
        ngo.record_event(event.id);
        ngo.followers.iter().map(|id| id.into_uuid()).collect()
    });
    if let Some(followers) = followers {
        notify_new_event(store, event.id, event.ngo_id, &followers);
    }

    info!(event_id = %event.id, ngo_id = %event.ngo_id, "Event created");
    Ok(event)
}

pub fn update_event(
    store: &Store,
    id: EventId,
    request: UpdateEventRequest,
) -> Result<Event, DomainError> {
    let schedule = match (&request.starts_at, &request.ends_at) {
        (Some(start), Some(end)) => Some((
            parse_naive("starts_at", start)?,
            parse_naive("ends_at", end)?,
        )),
        (None, None) => None,
        _ => {
            return Err(DomainError::validation(
                "starts_at and ends_at must be provided together",
            ))
        }
    };

    let event = update(&store.events, &id, "event", |event| {
        if let Some((starts_at, ends_at)) = schedule {
            event.reschedule(starts_at, ends_at)?;
        }
        if let Some(cover) = request.cover_image {
            event.cover_image = Some(cover);
        }
        Ok(event.clone())
    })?;

    info!(event_id = %id, "Event updated");
    Ok(event)
}

/// Cancels the event and notifies every enrolled volunteer.
pub fn cancel_event(store: &Store, id: EventId) -> Result<Event, DomainError> {
    let event = update(&store.events, &id, "event", |event| {
        event.cancel()?;
        Ok(event.clone())
    })?;

    let enrolled: Vec<Uuid> = event
        .enrolled_volunteers
        .iter()
        .map(|id| id.into_uuid())
        .collect();
    notify_event_cancelled(store, id, &enrolled);

    info!(event_id = %id, "Event cancelled");
    Ok(event)
}

/// Enrolls a volunteer and tells the organizing NGO.
pub fn enroll(store: &Store, id: EventId, volunteer_id: VolunteerId) -> Result<Event, DomainError> {
    let event = update(&store.events, &id, "event", |event| {
        event.enroll(volunteer_id)?;
        Ok(event.clone())
    })?;

    notify_event_registration(store, volunteer_id, event.ngo_id, id);

    info!(event_id = %id, volunteer_id = %volunteer_id, "Volunteer enrolled");
    Ok(event)
}

pub fn cancel_enrollment(
    store: &Store,
    id: EventId,
    volunteer_id: VolunteerId,
) -> Result<Event, DomainError> {
    let event = update(&store.events, &id, "event", |event| {
        event.cancel_enrollment(volunteer_id)?;
        Ok(event.clone())
    })?;

    info!(event_id = %id, volunteer_id = %volunteer_id, "Enrollment cancelled");
    Ok(event)
}

/// Confirms attendance and adds the event to the volunteer's history.
pub fn confirm_attendance(
    store: &Store,
    id: EventId,
    volunteer_id: VolunteerId,
) -> Result<Event, DomainError> {
    let event = update(&store.events, &id, "event", |event| {
        event.confirm_attendance(volunteer_id)?;
        Ok(event.clone())
    })?;

    if let Some(mut volunteer) = store.volunteers.get_mut(&volunteer_id) {
        volunteer.record_event(id);
    }

    info!(event_id = %id, volunteer_id = %volunteer_id, "Attendance confirmed");
    Ok(event)
}
