//! HTTP adapter for the ranking engine.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, ItemResponse, LoginRequest, PairResponse, StandingsResponse, SubmitVoteRequest,
    VoteResponse,
};
pub use handlers::RankingHandlers;
pub use routes::ranking_routes;
