//! Kernel module - shared server infrastructure.

pub mod store;

pub use store::{Store, StoreCounts};
