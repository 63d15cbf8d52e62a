//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, pair key, errors)
//! - `ranking` - Item entity, Elo rating model, next-pair selector

pub mod foundation;
pub mod ranking;
