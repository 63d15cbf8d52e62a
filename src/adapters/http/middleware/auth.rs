//! Voter-identity middleware and extractors for axum.
//!
//! This module provides:
//! - `voter_middleware` - Layer that validates the bearer passcode against
//!   the ranking store and injects the `VoterId` into extensions
//! - `RequireVoter` - Extractor that requires a validated voter
//!
//! # Architecture
//!
//! The middleware only consults the `RankingStore` port's `is_authorized`;
//! what a passcode *is* (provisioning, rotation) stays outside the engine.
//!
//! ```text
//! Request → voter_middleware → injects VoterId into extensions
//!                                      ↓
//!                              Handler → RequireVoter extractor reads it
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::VoterId;
use crate::ports::RankingStore;

/// Middleware state - the ranking store used for membership checks.
pub type VoterAuthState = Arc<dyn RankingStore>;

/// Middleware that resolves the calling voter from a bearer passcode.
///
/// 1. Extracts the token from the `Authorization: Bearer <passcode>` header
/// 2. Checks membership via `RankingStore::is_authorized`
/// 3. On success, injects `VoterId` into request extensions
/// 4. On missing token, continues without injecting (login route needs this)
/// 5. On unknown passcode or store failure, responds with an error
pub async fn voter_middleware(
    State(store): State<VoterAuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

    match token {
        Some(token) => {
            let voter = match VoterId::new(token) {
                Ok(voter) => voter,
                Err(_) => return unauthorized("Invalid passcode"),
            };

            match store.is_authorized(&voter).await {
                Ok(true) => {
                    request.extensions_mut().insert(voter);
                    next.run(request).await
                }
                Ok(false) => unauthorized("Invalid passcode"),
                Err(e) => {
                    tracing::error!("Voter lookup failed: {}", e);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(serde_json::json!({
                            "error": "Voter lookup unavailable",
                            "code": "STORE_UNAVAILABLE"
                        })),
                    )
                        .into_response()
                }
            }
        }
        None => {
            // No token provided - continue without identity.
            // Handlers use RequireVoter to enforce it.
            next.run(request).await
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": message,
            "code": "VOTER_NOT_AUTHORIZED"
        })),
    )
        .into_response()
}

/// Extractor that requires a validated voter identity.
///
/// Returns 401 if the voter middleware did not inject a `VoterId`.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireVoter(voter): RequireVoter) -> String {
///     format!("Voting as {}", voter)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireVoter(pub VoterId);

impl<S> axum::extract::FromRequestParts<S> for RequireVoter
where
    S: Send + Sync,
{
    type Rejection = VoterRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<VoterId>()
                .cloned()
                .map(RequireVoter)
                .ok_or(VoterRejection::Unauthenticated)
        })
    }
}

/// Rejection type for missing voter identity.
#[derive(Debug, Clone)]
pub enum VoterRejection {
    /// No valid passcode was provided.
    Unauthenticated,
}

impl IntoResponse for VoterRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            VoterRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Passcode required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
