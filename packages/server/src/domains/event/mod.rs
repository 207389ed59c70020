pub mod activities;
pub mod data;
pub mod models;

pub use data::{CreateEventRequest, EventStats, UpdateEventRequest};
pub use models::Event;
