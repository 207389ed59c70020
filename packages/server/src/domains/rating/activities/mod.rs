//! Rating service operations.

mod queries;
mod rate;

pub use queries::{
    average, between, by_event, by_score, get, given, received, stats, user_stats, RatingStats,
    UserRatingStats,
};
pub use rate::{ngo_rates_volunteer, remove, update, volunteer_rates_ngo};
