// Business domains
pub mod comment;
pub mod event;
pub mod ngo;
pub mod notification;
pub mod post;
pub mod rating;
pub mod volunteer;
