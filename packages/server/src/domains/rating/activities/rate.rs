//! Rating creation, update and removal.

use tracing::{debug, info};
use uuid::Uuid;

use crate::common::{DomainError, EventId, NgoId, RatingId, UserKind, UserProfile, VolunteerId};
use crate::domains::notification::activities::notify_rating;
use crate::domains::rating::models::rating::check_score;
use crate::domains::rating::models::Rating;
use crate::kernel::store::{find, update as update_entry};
use crate::kernel::Store;

use super::queries::average;

pub fn volunteer_rates_ngo(
    store: &Store,
    volunteer_id: VolunteerId,
    ngo_id: NgoId,
    event_id: EventId,
    score: f32,
    comment: Option<String>,
) -> Result<Rating, DomainError> {
    check_participants(store, UserKind::Volunteer, volunteer_id, ngo_id, event_id, score)?;
    ensure_first_rating(store, volunteer_id.into_uuid(), ngo_id.into_uuid(), event_id)?;

    let rating = Rating::volunteer_rates_ngo(volunteer_id, ngo_id, event_id, score, comment)?;
    Ok(save(store, rating))
}

pub fn ngo_rates_volunteer(
    store: &Store,
    ngo_id: NgoId,
    volunteer_id: VolunteerId,
    event_id: EventId,
    score: f32,
    comment: Option<String>,
) -> Result<Rating, DomainError> {
    check_participants(store, UserKind::Ngo, volunteer_id, ngo_id, event_id, score)?;
    ensure_first_rating(store, ngo_id.into_uuid(), volunteer_id.into_uuid(), event_id)?;

    let rating = Rating::ngo_rates_volunteer(ngo_id, volunteer_id, event_id, score, comment)?;
    Ok(save(store, rating))
}

pub fn update(
    store: &Store,
    id: RatingId,
    score: f32,
    comment: Option<String>,
) -> Result<Rating, DomainError> {
    let rating = update_entry(&store.ratings, &id, "rating", |rating| {
        rating.update(score, comment)?;
        Ok(rating.clone())
    })?;
    refresh_average(store, rating.ratee_id, rating.ratee_kind);

    info!(rating_id = %id, score, "Rating updated");
    Ok(rating)
}

/// Deactivates a rating. Only its rater may do so.
pub fn remove(store: &Store, id: RatingId, user_id: Uuid) -> Result<Rating, DomainError> {
    let rating = update_entry(&store.ratings, &id, "rating", |rating| {
        if rating.rater_id != user_id {
            return Err(DomainError::validation(
                "only the author can remove a rating",
            ));
        }
        rating.deactivate();
        Ok(rating.clone())
    })?;
    refresh_average(store, rating.ratee_id, rating.ratee_kind);

    info!(rating_id = %id, "Rating removed");
    Ok(rating)
}

/// Score range and event existence, then the rater's own link to the event
/// before the ratee's.
fn check_participants(
    store: &Store,
    rater: UserKind,
    volunteer_id: VolunteerId,
    ngo_id: NgoId,
    event_id: EventId,
    score: f32,
) -> Result<(), DomainError> {
    check_score(score)?;
    let event = find(&store.events, &event_id, "event")
        .map_err(|_| DomainError::rule(format!("event {} does not exist", event_id)))?;

    let attended = || {
        if event.has_attended(volunteer_id) {
            Ok(())
        } else {
            Err(DomainError::rule("volunteer did not attend this event"))
        }
    };
    let organized = || {
        if event.ngo_id == ngo_id {
            Ok(())
        } else {
            Err(DomainError::rule("NGO did not organize this event"))
        }
    };

    match rater {
        UserKind::Volunteer => attended().and_then(|_| organized()),
        UserKind::Ngo => organized().and_then(|_| attended()),
    }
}

fn ensure_first_rating(
    store: &Store,
    rater_id: Uuid,
    ratee_id: Uuid,
    event_id: EventId,
) -> Result<(), DomainError> {
    let exists = store.ratings.iter().any(|r| {
        r.active && r.rater_id == rater_id && r.ratee_id == ratee_id && r.event_id == event_id
    });
    if exists {
        return Err(DomainError::rule(
            "this user was already rated for this event",
        ));
    }
    Ok(())
}

fn save(store: &Store, rating: Rating) -> Rating {
    store.ratings.insert(rating.id, rating.clone());
    refresh_average(store, rating.ratee_id, rating.ratee_kind);

    if let Err(err) = notify_rating(store, rating.ratee_id, rating.ratee_kind, rating.rater_id) {
        debug!(error = %err, "Rating notification skipped");
    }

    info!(
        rating_id = %rating.id,
        rater_id = %rating.rater_id,
        ratee_id = %rating.ratee_id,
        score = rating.score,
        "Rating created"
    );
    rating
}

/// Copies the ratee's current average onto their profile, when they exist.
fn refresh_average(store: &Store, user_id: Uuid, kind: UserKind) {
    let avg = average(store, user_id, kind);
    let apply = |profile: &mut UserProfile| {
        if avg > 0.0 {
            if let Err(err) = profile.set_rating(avg) {
                debug!(error = %err, avg, "Average out of range, profile rating left unchanged");
            }
        } else {
            profile.reset_rating();
        }
    };

    match kind {
        UserKind::Volunteer => {
            if let Some(mut volunteer) = store.volunteers.get_mut(&VolunteerId::from_uuid(user_id)) {
                apply(&mut volunteer.profile);
            }
        }
        UserKind::Ngo => {
            if let Some(mut ngo) = store.ngos.get_mut(&NgoId::from_uuid(user_id)) {
                apply(&mut ngo.profile);
            }
        }
    }
    debug!(user_id = %user_id, average = avg, "Profile rating refreshed");
}
