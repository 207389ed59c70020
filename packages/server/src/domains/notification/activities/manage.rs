use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::common::{DomainError, NotificationId};
use crate::kernel::Store;

fn not_recipient() -> DomainError {
    DomainError::validation("user is not the recipient of this notification")
}

/// Marks one notification read. `Ok(false)` when the id is unknown.
pub fn mark_read(store: &Store, id: NotificationId, user_id: Uuid) -> Result<bool, DomainError> {
    let Some(mut notification) = store.notifications.get_mut(&id) else {
        return Ok(false);
    };
    if notification.recipient_id != user_id {
        return Err(not_recipient());
    }
    notification.mark_read();
    Ok(true)
}

/// Returns how many notifications changed state.
pub fn mark_all_read(store: &Store, user_id: Uuid) -> usize {
    let mut count = 0;
    for mut entry in store.notifications.iter_mut() {
        if entry.recipient_id == user_id && !entry.read {
            entry.mark_read();
            count += 1;
        }
    }
    info!(user_id = %user_id, count, "Notifications marked read");
    count
}

/// Deletes a notification. `Ok(false)` when the id is unknown.
pub fn remove(store: &Store, id: NotificationId, user_id: Uuid) -> Result<bool, DomainError> {
    let recipient = match store.notifications.get(&id) {
        Some(notification) => notification.recipient_id,
        None => return Ok(false),
    };
    if recipient != user_id {
        return Err(not_recipient());
    }
    store.notifications.remove(&id);
    info!(notification_id = %id, "Notification removed");
    Ok(true)
}

/// Drops read notifications older than `retention`.
pub fn purge_read(store: &Store, retention: Duration) -> usize {
    let cutoff = Utc::now() - retention;
    let before = store.notifications.len();
    store
        .notifications
        .retain(|_, n| !(n.read && n.created_at < cutoff));
    let removed = before.saturating_sub(store.notifications.len());
    info!(removed, "Old notifications purged");
    removed
}
