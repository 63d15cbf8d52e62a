//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RankingStore` - Durable items, voters, and vote records; owns the
//!   atomic vote transaction

mod ranking_store;

pub use ranking_store::{RankingStore, RatingUpdate};
