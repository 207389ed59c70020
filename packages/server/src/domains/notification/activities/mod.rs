//! Notification service operations.

mod manage;
mod queries;
mod send;

pub use manage::{mark_all_read, mark_read, purge_read, remove};
pub use queries::{all_for, get, stats, unread_count, unread_for, NotificationStats};
pub use send::{
    notify_event_cancelled, notify_event_registration, notify_new_event, notify_new_follower,
    notify_new_post, notify_rating,
};
