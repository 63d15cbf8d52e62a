//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Durable ranking store backed by PostgreSQL
//! - `http` - REST API exposure and voter-identity middleware

pub mod http;
pub mod postgres;

pub use self::http::{ranking_routes, RankingHandlers};
pub use postgres::PostgresRankingStore;
