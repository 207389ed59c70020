// Volunteer Hub - API Core
//
// Backend API connecting volunteers and NGOs around events, posts,
// comments, ratings and notifications. Everything lives in memory.
//
// Domain logic is organized per-domain in domains/*/{models,data,activities}.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
