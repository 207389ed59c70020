// Common types and utilities shared across the application

pub mod entity_ids;
pub mod error;
pub mod extract;
pub mod id;
pub mod profile;
pub mod time;
pub mod types;

pub use entity_ids::{CommentId, EventId, NgoId, NotificationId, PostId, RatingId, VolunteerId};
pub use error::{ApiError, ApiResult, DomainError};
pub use extract::{JsonBody, PathParams, QueryParams};
pub use id::Id;
pub use profile::UserProfile;
pub use types::{
    catalog, AreaOfInterest, AreaRequest, Catalog, CatalogEntry, EventStatus, NotificationKind,
    ThemePreference, UserKind,
};
