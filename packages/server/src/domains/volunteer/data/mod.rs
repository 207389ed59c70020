pub mod volunteer;

pub use volunteer::{CreateVolunteerRequest, UpdateVolunteerRequest, VolunteerStats};
