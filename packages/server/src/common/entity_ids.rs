//! Typed id aliases for every stored entity.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Volunteer entities.
pub struct Volunteer;

/// Marker type for NGO entities.
pub struct Ngo;

/// Marker type for Event entities.
pub struct Event;

/// Marker type for Post entities.
pub struct Post;

/// Marker type for Comment entities.
pub struct Comment;

/// Marker type for Notification entities.
pub struct Notification;

/// Marker type for Rating entities.
pub struct Rating;

// ============================================================================
// Type aliases
// ============================================================================

pub type VolunteerId = Id<Volunteer>;
pub type NgoId = Id<Ngo>;
pub type EventId = Id<Event>;
pub type PostId = Id<Post>;
pub type CommentId = Id<Comment>;
pub type NotificationId = Id<Notification>;
pub type RatingId = Id<Rating>;
