pub mod data;
pub mod models;

pub use data::{CreateNgoRequest, NgoStats, UpdateNgoRequest};
pub use models::Ngo;
