//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, the canonical pair key, and the error types
//! that form the vocabulary of the ranking domain.

mod errors;
mod ids;
mod pair_key;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ItemId, VoterId};
pub use pair_key::PairKey;
