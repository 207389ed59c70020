pub mod event;

pub use event::{CreateEventRequest, EventStats, UpdateEventRequest};
