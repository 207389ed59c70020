pub mod rating;

pub use rating::{
    AverageResponse, BetweenQuery, KindQuery, RateRequest, RemovedResponse, ScoreQuery,
    UpdateRatingRequest,
};
