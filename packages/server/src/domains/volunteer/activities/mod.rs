mod follow;

pub use follow::{follow_ngo, unfollow_ngo};
