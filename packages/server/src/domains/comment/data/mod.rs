pub mod comment;

pub use comment::{CommentStats, CommentTotals, CreateCommentRequest, RecentCommentsQuery};
