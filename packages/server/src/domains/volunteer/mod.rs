pub mod activities;
pub mod data;
pub mod models;

pub use data::{CreateVolunteerRequest, UpdateVolunteerRequest, VolunteerStats};
pub use models::Volunteer;
