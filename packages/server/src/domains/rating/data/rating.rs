use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{EventId, NgoId, RatingId, UserKind, VolunteerId};

/// Body of both rating directions. The path decides who rates whom.
#[derive(Debug, Clone, Deserialize)]
pub struct RateRequest {
    pub volunteer_id: VolunteerId,
    pub ngo_id: NgoId,
    pub event_id: EventId,
    pub score: f32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRatingRequest {
    pub score: f32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct KindQuery {
    pub kind: UserKind,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BetweenQuery {
    pub user1_id: Uuid,
    pub user2_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoreQuery {
    pub min: f32,
    pub max: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageResponse {
    pub user_id: Uuid,
    pub kind: UserKind,
    pub average: f32,
    /// One decimal place, or "no ratings yet".
    pub formatted: String,
}

impl AverageResponse {
    pub fn new(user_id: Uuid, kind: UserKind, average: f32) -> Self {
        let formatted = if average > 0.0 {
            format!("{:.1}", average)
        } else {
            "no ratings yet".to_string()
        };
        Self {
            user_id,
            kind,
            average,
            formatted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovedResponse {
    pub message: String,
    pub rating_id: RatingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_formatting() {
        let user = Uuid::now_v7();
        assert_eq!(AverageResponse::new(user, UserKind::Ngo, 4.34).formatted, "4.3");
        assert_eq!(AverageResponse::new(user, UserKind::Ngo, 0.0).formatted, "no ratings yet");
    }
}
