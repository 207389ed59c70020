use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{EventId, NgoId, UserKind, VolunteerId};

#[derive(Debug, Clone, Deserialize)]
pub struct RatingNotificationRequest {
    pub recipient_id: Uuid,
    pub recipient_kind: UserKind,
    pub sender_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFollowerRequest {
    pub ngo_id: NgoId,
    pub volunteer_id: VolunteerId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEventRequest {
    pub event_id: EventId,
    pub ngo_id: NgoId,
    #[serde(default)]
    pub followers: Vec<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRegistrationRequest {
    pub volunteer_id: VolunteerId,
    pub ngo_id: NgoId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountResponse {
    pub unread: usize,
}

/// What a client polling for new notifications receives.
#[derive(Debug, Clone, Serialize)]
pub struct PollResponse<T> {
    pub unread: Vec<T>,
    pub count: usize,
    pub has_new: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkReadResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkAllReadResponse {
    pub count: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    pub removed: usize,
}
