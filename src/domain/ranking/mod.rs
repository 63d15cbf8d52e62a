//! Ranking domain module.
//!
//! The engine core: the `Item` entity, the Elo rating model, and the
//! next-pair selector. Everything here is pure and synchronous; all I/O and
//! all fallibility live behind the `RankingStore` port.

pub mod elo;
pub mod pair_selector;

mod errors;
mod item;

pub use errors::RankingError;
pub use item::{Item, BASELINE_RATING};
