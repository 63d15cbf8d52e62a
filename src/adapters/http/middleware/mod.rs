//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Voter-identity middleware and extractors

pub mod auth;

pub use auth::{voter_middleware, RequireVoter, VoterAuthState, VoterRejection};
