pub mod post;

pub use post::{
    CreatePostRequest, EditContentRequest, FeedQuery, LikeResponse, LikedResponse, PostStats,
    UnlikeResponse,
};
