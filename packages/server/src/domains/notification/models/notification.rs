use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::time::within;
use crate::common::{EventId, NotificationId, NotificationKind};

/// A message delivered to one user, polled by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub recipient_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub related_event_id: Option<EventId>,
    pub sender_id: Option<Uuid>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, recipient_id: Uuid) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            recipient_id,
            created_at: Utc::now(),
            read: false,
            related_event_id: None,
            sender_id: None,
        }
    }

    pub fn with_sender(mut self, sender_id: Uuid) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    pub fn with_event(mut self, event_id: EventId) -> Self {
        self.related_event_id = Some(event_id);
        self
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }

    pub fn is_recent(&self) -> bool {
        within(self.created_at, Duration::hours(24))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_read_flag() {
        let recipient = Uuid::now_v7();
        let sender = Uuid::now_v7();
        let event = EventId::new();
        let mut n = Notification::new(NotificationKind::EventRegistration, "hi", recipient)
            .with_sender(sender)
            .with_event(event);

        assert!(!n.read);
        assert_eq!(n.sender_id, Some(sender));
        assert_eq!(n.related_event_id, Some(event));
        assert!(n.is_recent());

        n.mark_read();
        assert!(n.read);
    }

    #[test]
    fn serializes_kind_as_snake_case() {
        let n = Notification::new(NotificationKind::NewFollower, "x", Uuid::now_v7());
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "new_follower");
        assert_eq!(json["read"], false);
    }
}
