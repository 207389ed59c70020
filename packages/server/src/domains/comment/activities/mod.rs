mod thread;

pub use thread::{add_comment, reactivate_comment, remove_comment};
