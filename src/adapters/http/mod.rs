//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod ranking;

// Re-export key types for convenience
pub use ranking::ranking_routes;
pub use ranking::RankingHandlers;
