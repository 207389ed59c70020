pub mod notification;

pub use notification::{
    EventRegistrationRequest, LimitQuery, MarkAllReadResponse, MarkReadResponse,
    NewEventRequest, NewFollowerRequest, PollResponse, PurgeResponse, RatingNotificationRequest,
    UnreadCountResponse,
};
