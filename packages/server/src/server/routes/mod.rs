pub mod comments;
pub mod events;
pub mod health;
pub mod ngos;
pub mod notifications;
pub mod posts;
pub mod ratings;
pub mod system;
pub mod volunteers;

pub use health::*;
