use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::profile::{MAX_SCORE, MIN_SCORE};
use crate::common::time::within;
use crate::common::{DomainError, EventId, NgoId, RatingId, UserKind, VolunteerId};

pub const MAX_COMMENT_LEN: usize = 1000;

/// A score one participant of an event gives the other side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: RatingId,
    pub rater_id: Uuid,
    pub rater_kind: UserKind,
    pub ratee_id: Uuid,
    pub ratee_kind: UserKind,
    pub score: f32,
    pub comment: Option<String>,
    pub event_id: EventId,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl Rating {
    pub fn volunteer_rates_ngo(
        volunteer_id: VolunteerId,
        ngo_id: NgoId,
        event_id: EventId,
        score: f32,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            (volunteer_id.into_uuid(), UserKind::Volunteer),
            (ngo_id.into_uuid(), UserKind::Ngo),
            event_id,
            score,
            comment,
        )
    }

    pub fn ngo_rates_volunteer(
        ngo_id: NgoId,
        volunteer_id: VolunteerId,
        event_id: EventId,
        score: f32,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            (ngo_id.into_uuid(), UserKind::Ngo),
            (volunteer_id.into_uuid(), UserKind::Volunteer),
            event_id,
            score,
            comment,
        )
    }

    fn new(
        (rater_id, rater_kind): (Uuid, UserKind),
        (ratee_id, ratee_kind): (Uuid, UserKind),
        event_id: EventId,
        score: f32,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: RatingId::new(),
            rater_id,
            rater_kind,
            ratee_id,
            ratee_kind,
            score: check_score(score)?,
            comment: check_comment(comment)?,
            event_id,
            created_at: Utc::now(),
            active: true,
        })
    }

    pub fn update(&mut self, score: f32, comment: Option<String>) -> Result<(), DomainError> {
        if !self.active {
            return Err(DomainError::rule("cannot update an inactive rating"));
        }
        self.score = check_score(score)?;
        self.comment = check_comment(comment)?;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn reactivate(&mut self) {
        self.active = true;
    }

    pub fn is_volunteer_rating_ngo(&self) -> bool {
        self.rater_kind == UserKind::Volunteer && self.ratee_kind == UserKind::Ngo
    }

    pub fn is_ngo_rating_volunteer(&self) -> bool {
        self.rater_kind == UserKind::Ngo && self.ratee_kind == UserKind::Volunteer
    }

    pub fn has_comment(&self) -> bool {
        self.comment.is_some()
    }

    pub fn is_recent(&self) -> bool {
        within(self.created_at, Duration::days(30))
    }

    /// True if the rating was exchanged between the two users, in either direction.
    pub fn is_between(&self, a: Uuid, b: Uuid) -> bool {
        (self.rater_id == a && self.ratee_id == b) || (self.rater_id == b && self.ratee_id == a)
    }
}

pub fn check_score(score: f32) -> Result<f32, DomainError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(DomainError::validation(format!(
            "score must be between {:.1} and {:.1}",
            MIN_SCORE, MAX_SCORE
        )));
    }
    Ok(score)
}

fn check_comment(comment: Option<String>) -> Result<Option<String>, DomainError> {
    let comment = comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    if let Some(c) = &comment {
        if c.chars().count() > MAX_COMMENT_LEN {
            return Err(DomainError::validation(format!(
                "comment must be at most {} characters",
                MAX_COMMENT_LEN
            )));
        }
    }
    Ok(comment)
}
