pub mod ngo;

pub use ngo::{CreateNgoRequest, NgoStats, UpdateNgoRequest};
