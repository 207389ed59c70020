//! Notification constructors. Each one stores what it builds.

use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

use crate::common::{DomainError, EventId, NgoId, NotificationKind, PostId, UserKind, VolunteerId};
use crate::domains::notification::models::Notification;
use crate::kernel::Store;

const NEW_EVENT_MESSAGE: &str = "An NGO you follow created a new event!";
const REGISTRATION_MESSAGE: &str = "A volunteer registered for your event!";
const CANCELLED_MESSAGE: &str = "An event you were registered for was cancelled.";
const NEW_FOLLOWER_MESSAGE: &str = "A new volunteer started following your NGO!";
const NEW_POST_MESSAGE: &str = "An NGO you follow published a new post!";

fn save(store: &Store, notification: Notification) -> Notification {
    store
        .notifications
        .insert(notification.id, notification.clone());
    notification
}

fn require(field: &str, id: Uuid) -> Result<(), DomainError> {
    if id.is_nil() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Distinct, non-nil recipients in their original order.
fn recipients<'a>(ids: impl IntoIterator<Item = &'a Uuid>, exclude: Option<Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .copied()
        .filter(|id| !id.is_nil() && Some(*id) != exclude && seen.insert(*id))
        .collect()
}

pub fn notify_rating(
    store: &Store,
    recipient_id: Uuid,
    recipient_kind: UserKind,
    sender_id: Uuid,
) -> Result<Notification, DomainError> {
    require("recipient_id", recipient_id)?;
    require("sender_id", sender_id)?;

    let message = match recipient_kind {
        UserKind::Ngo => "You received a new rating from a volunteer!",
        UserKind::Volunteer => "You received a new rating from an NGO!",
    };
    let notification =
        Notification::new(NotificationKind::NewRating, message, recipient_id).with_sender(sender_id);

    info!(recipient_id = %recipient_id, "Rating notification sent");
    Ok(save(store, notification))
}

pub fn notify_new_event(
    store: &Store,
    event_id: EventId,
    ngo_id: NgoId,
    followers: &[Uuid],
) -> Vec<Notification> {
    let sent: Vec<_> = recipients(followers, None)
        .into_iter()
        .map(|follower| {
            let notification =
                Notification::new(NotificationKind::EventCreated, NEW_EVENT_MESSAGE, follower)
                    .with_sender(ngo_id.into_uuid())
                    .with_event(event_id);
            save(store, notification)
        })
        .collect();

    info!(event_id = %event_id, count = sent.len(), "New event notifications sent");
    sent
}

pub fn notify_event_registration(
    store: &Store,
    volunteer_id: VolunteerId,
    ngo_id: NgoId,
    event_id: EventId,
) -> Notification {
    let notification = Notification::new(
        NotificationKind::EventRegistration,
        REGISTRATION_MESSAGE,
        ngo_id.into_uuid(),
    )
    .with_sender(volunteer_id.into_uuid())
    .with_event(event_id);

    info!(event_id = %event_id, ngo_id = %ngo_id, "Registration notification sent");
    save(store, notification)
}

pub fn notify_event_cancelled(
    store: &Store,
    event_id: EventId,
    volunteers: &[Uuid],
) -> Vec<Notification> {
    let sent: Vec<_> = recipients(volunteers, None)
        .into_iter()
        .map(|volunteer| {
            let notification =
                Notification::new(NotificationKind::EventCancelled, CANCELLED_MESSAGE, volunteer)
                    .with_event(event_id);
            save(store, notification)
        })
        .collect();

    info!(event_id = %event_id, count = sent.len(), "Cancellation notifications sent");
    sent
}

pub fn notify_new_follower(store: &Store, ngo_id: NgoId, volunteer_id: VolunteerId) -> Notification {
    let notification = Notification::new(
        NotificationKind::NewFollower,
        NEW_FOLLOWER_MESSAGE,
        ngo_id.into_uuid(),
    )
    .with_sender(volunteer_id.into_uuid());

    info!(ngo_id = %ngo_id, volunteer_id = %volunteer_id, "Follower notification sent");
    save(store, notification)
}

/// Notifies followers of a new post. The author never notifies themself.
pub fn notify_new_post(
    store: &Store,
    post_id: PostId,
    author_id: Uuid,
    followers: &[Uuid],
) -> Vec<Notification> {
    let sent: Vec<_> = recipients(followers, Some(author_id))
        .into_iter()
        .map(|follower| {
            let notification =
                Notification::new(NotificationKind::NewPost, NEW_POST_MESSAGE, follower)
                    .with_sender(author_id);
            save(store, notification)
        })
        .collect();

    info!(post_id = %post_id, count = sent.len(), "New post notifications sent");
    sent
}
