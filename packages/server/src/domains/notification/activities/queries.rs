use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::common::{DomainError, NotificationId, NotificationKind};
use crate::domains::notification::models::Notification;
use crate::kernel::store::{collect, find};
use crate::kernel::Store;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationStats {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
    pub by_kind: BTreeMap<NotificationKind, usize>,
}

fn newest_first(mut notifications: Vec<Notification>) -> Vec<Notification> {
    notifications.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    notifications
}

pub fn unread_for(store: &Store, user_id: Uuid) -> Vec<Notification> {
    newest_first(collect(&store.notifications, |n| {
        n.recipient_id == user_id && !n.read
    }))
}

/// Most recent notifications for a user, at least one when any exist.
pub fn all_for(store: &Store, user_id: Uuid, limit: usize) -> Vec<Notification> {
    let mut notifications = newest_first(collect(&store.notifications, |n| {
        n.recipient_id == user_id
    }));
    notifications.truncate(limit.max(1));
    notifications
}

pub fn unread_count(store: &Store, user_id: Uuid) -> usize {
    store
        .notifications
        .iter()
        .filter(|n| n.recipient_id == user_id && !n.read)
        .count()
}

pub fn get(store: &Store, id: NotificationId) -> Result<Notification, DomainError> {
    find(&store.notifications, &id, "notification")
}

pub fn stats(store: &Store) -> NotificationStats {
    let mut by_kind = BTreeMap::new();
    let mut unread = 0;
    for entry in store.notifications.iter() {
        *by_kind.entry(entry.kind).or_insert(0) += 1;
        if !entry.read {
            unread += 1;
        }
    }
    let total = store.notifications.len();

    NotificationStats {
        total,
        unread,
        read: total.saturating_sub(unread),
        by_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn seed(store: &Store, recipient: Uuid, kind: NotificationKind, age_minutes: i64) -> NotificationId {
        let mut n = Notification::new(kind, "msg", recipient);
        n.created_at = Utc::now() - Duration::minutes(age_minutes);
        let id = n.id;
        store.notifications.insert(id, n);
        id
    }

    #[test]
    fn listings_are_newest_first_and_limited() {
        let store = Store::new();
        let user = Uuid::now_v7();
        let old = seed(&store, user, NotificationKind::NewPost, 30);
        let new = seed(&store, user, NotificationKind::NewPost, 1);
        seed(&store, Uuid::now_v7(), NotificationKind::NewPost, 1);

        let all = all_for(&store, user, 20);
        assert_eq!(all.iter().map(|n| n.id).collect::<Vec<_>>(), vec![new, old]);

        assert_eq!(all_for(&store, user, 0).len(), 1);
        assert_eq!(unread_for(&store, user).len(), 2);
        assert_eq!(unread_count(&store, user), 2);
    }

    #[test]
    fn stats_group_by_kind() {
        let store = Store::new();
        let user = Uuid::now_v7();
        let id = seed(&store, user, NotificationKind::NewRating, 0);
        seed(&store, user, NotificationKind::NewRating, 0);
        seed(&store, user, NotificationKind::NewFollower, 0);
        store.notifications.get_mut(&id).unwrap().mark_read();

        let s = stats(&store);
        assert_eq!(s.total, 3);
        assert_eq!(s.unread, 2);
        assert_eq!(s.read, 1);
        assert_eq!(s.by_kind[&NotificationKind::NewRating], 2);
    }

    #[test]
    fn get_unknown_is_not_found() {
        let store = Store::new();
        assert_eq!(
            get(&store, NotificationId::new()).unwrap_err(),
            DomainError::NotFound("notification")
        );
    }
}
