//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresRankingStore` - Items, voters, and vote records with the
//!   transactional vote-recording operation

mod ranking_store;

pub use ranking_store::PostgresRankingStore;
