//! In-memory persistence.
//!
//! One `DashMap` per resource. Helpers below never hold a guard past the
//! call, so callers can chain lookups across maps without deadlocking.

use dashmap::DashMap;
use serde::Serialize;
use std::hash::Hash;

use crate::common::{
    CommentId, DomainError, EventId, NgoId, NotificationId, PostId, RatingId, VolunteerId,
};
use crate::domains::comment::models::Comment;
use crate::domains::event::models::Event;
use crate::domains::ngo::models::Ngo;
use crate::domains::notification::models::Notification;
use crate::domains::post::models::Post;
use crate::domains::rating::models::Rating;
use crate::domains::volunteer::models::Volunteer;

#[derive(Default)]
pub struct Store {
    pub volunteers: DashMap<VolunteerId, Volunteer>,
    pub ngos: DashMap<NgoId, Ngo>,
    pub events: DashMap<EventId, Event>,
    pub posts: DashMap<PostId, Post>,
    pub comments: DashMap<CommentId, Comment>,
    pub notifications: DashMap<NotificationId, Notification>,
    pub ratings: DashMap<RatingId, Rating>,
}

/// Entity totals, as reported by the dashboard.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StoreCounts {
    pub volunteers: usize,
    pub ngos: usize,
    pub events: usize,
    pub posts: usize,
    pub comments: usize,
    pub notifications: usize,
    pub ratings: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            volunteers: self.volunteers.len(),
            ngos: self.ngos.len(),
            events: self.events.len(),
            posts: self.posts.len(),
            comments: self.comments.len(),
            notifications: self.notifications.len(),
            ratings: self.ratings.len(),
        }
    }

    pub fn clear(&self) {
        self.volunteers.clear();
        self.ngos.clear();
        self.events.clear();
        self.posts.clear();
        self.comments.clear();
        self.notifications.clear();
        self.ratings.clear();
    }
}

/// Clones the entity stored under `id`.
pub fn find<K, V>(map: &DashMap<K, V>, id: &K, entity: &'static str) -> Result<V, DomainError>
where
    K: Eq + Hash,
    V: Clone,
{
    map.get(id)
        .map(|entry| entry.value().clone())
        .ok_or(DomainError::NotFound(entity))
}

/// Runs `f` against the entity stored under `id` while holding its write guard.
pub fn update<K, V, R>(
    map: &DashMap<K, V>,
    id: &K,
    entity: &'static str,
    f: impl FnOnce(&mut V) -> Result<R, DomainError>,
) -> Result<R, DomainError>
where
    K: Eq + Hash,
{
    let mut entry = map.get_mut(id).ok_or(DomainError::NotFound(entity))?;
    f(entry.value_mut())
}

/// Clones every value matching `pred`.
pub fn collect<K, V>(map: &DashMap<K, V>, pred: impl Fn(&V) -> bool) -> Vec<V>
where
    K: Eq + Hash,
    V: Clone,
{
    map.iter()
        .filter(|entry| pred(entry.value()))
        .map(|entry| entry.value().clone())
        .collect()
}
