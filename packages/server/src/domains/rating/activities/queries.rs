use serde::Serialize;
use uuid::Uuid;

use crate::common::profile::{MAX_SCORE, MIN_SCORE};
use crate::common::{DomainError, EventId, RatingId, UserKind};
use crate::domains::rating::models::Rating;
use crate::kernel::store::{collect, find};
use crate::kernel::Store;

#[derive(Debug, Clone, Serialize)]
pub struct RatingStats {
    pub total: usize,
    pub active: usize,
    pub average_score: f64,
    pub with_comment: usize,
    pub volunteer_to_ngo: usize,
    pub ngo_to_volunteer: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRatingStats {
    pub user_id: Uuid,
    pub kind: UserKind,
    pub received: usize,
    pub given: usize,
    pub average: f32,
    pub recent_received: usize,
}

fn newest_first(mut ratings: Vec<Rating>) -> Vec<Rating> {
    ratings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    ratings
}

pub fn get(store: &Store, id: RatingId) -> Result<Rating, DomainError> {
    find(&store.ratings, &id, "rating")
}

/// Active ratings the user received as `kind`.
pub fn received(store: &Store, user_id: Uuid, kind: UserKind) -> Vec<Rating> {
    newest_first(collect(&store.ratings, |r| {
        r.active && r.ratee_id == user_id && r.ratee_kind == kind
    }))
}

/// Active ratings the user gave as `kind`.
pub fn given(store: &Store, user_id: Uuid, kind: UserKind) -> Vec<Rating> {
    newest_first(collect(&store.ratings, |r| {
        r.active && r.rater_id == user_id && r.rater_kind == kind
    }))
}

/// Mean of the active ratings received, 0.0 when there are none.
pub fn average(store: &Store, user_id: Uuid, kind: UserKind) -> f32 {
    let scores: Vec<f32> = received(store, user_id, kind)
        .iter()
        .map(|r| r.score)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f32>() / scores.len() as f32
}

pub fn by_event(store: &Store, event_id: EventId) -> Vec<Rating> {
    newest_first(collect(&store.ratings, |r| r.active && r.event_id == event_id))
}

pub fn between(store: &Store, a: Uuid, b: Uuid) -> Vec<Rating> {
    newest_first(collect(&store.ratings, |r| r.active && r.is_between(a, b)))
}

/// Active ratings with a score in `[min, max]`. `max` defaults to the top score.
pub fn by_score(store: &Store, min: f32, max: Option<f32>) -> Result<Vec<Rating>, DomainError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&min) {
        return Err(DomainError::validation(format!(
            "min must be between {:.1} and {:.1}",
            MIN_SCORE, MAX_SCORE
        )));
    }
    let max = max.unwrap_or(MAX_SCORE);
    if max < min || max > MAX_SCORE {
        return Err(DomainError::validation(format!(
            "max must be between min and {:.1}",
            MAX_SCORE
        )));
    }

    Ok(newest_first(collect(&store.ratings, |r| {
        r.active && r.score >= min && r.score <= max
    })))
}

pub fn stats(store: &Store) -> RatingStats {
    let active = collect(&store.ratings, |r| r.active);
    let average_score = if active.is_empty() {
        0.0
    } else {
        let sum: f64 = active.iter().map(|r| f64::from(r.score)).sum();
        round_tenth(sum / active.len() as f64)
    };

    RatingStats {
        total: store.ratings.len(),
        active: active.len(),
        average_score,
        with_comment: active.iter().filter(|r| r.has_comment()).count(),
        volunteer_to_ngo: active.iter().filter(|r| r.is_volunteer_rating_ngo()).count(),
        ngo_to_volunteer: active.iter().filter(|r| r.is_ngo_rating_volunteer()).count(),
    }
}

pub fn user_stats(store: &Store, user_id: Uuid, kind: UserKind) -> UserRatingStats {
    let received = received(store, user_id, kind);

    UserRatingStats {
        user_id,
        kind,
        received: received.len(),
        given: given(store, user_id, kind).len(),
        average: average(store, user_id, kind),
        recent_received: received.iter().filter(|r| r.is_recent()).count(),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
