//! HTTP handlers for ranking endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireVoter;
use crate::application::handlers::{
    GetStandingsHandler, NextPairHandler, NextPairQuery, SubmitVoteCommand, SubmitVoteHandler,
};
use crate::domain::foundation::{ItemId, VoterId};
use crate::domain::ranking::RankingError;
use crate::ports::RankingStore;

use super::dto::{
    ErrorResponse, ItemResponse, LoginRequest, PairResponse, StandingsResponse, SubmitVoteRequest,
    VoteResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RankingHandlers {
    store: Arc<dyn RankingStore>,
    next_pair_handler: Arc<NextPairHandler>,
    submit_vote_handler: Arc<SubmitVoteHandler>,
    standings_handler: Arc<GetStandingsHandler>,
}

impl RankingHandlers {
    pub fn new(store: Arc<dyn RankingStore>) -> Self {
        Self {
            next_pair_handler: Arc::new(NextPairHandler::new(store.clone())),
            submit_vote_handler: Arc::new(SubmitVoteHandler::new(store.clone())),
            standings_handler: Arc::new(GetStandingsHandler::new(store.clone())),
            store,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/login - Verify a passcode
///
/// Stateless: a valid passcode is simply echoed back by clients as the
/// bearer token on every later request.
pub async fn login(
    State(handlers): State<RankingHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let voter = match VoterId::new(req.passcode) {
        Ok(voter) => voter,
        Err(_) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Invalid passcode")),
            )
                .into_response()
        }
    };

    match handlers.store.is_authorized(&voter).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Invalid passcode")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Passcode check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Passcode check failed")),
            )
                .into_response()
        }
    }
}

/// GET /api/pair - Next unjudged pair for the calling voter
pub async fn next_pair(
    State(handlers): State<RankingHandlers>,
    RequireVoter(voter): RequireVoter,
) -> Response {
    match handlers.next_pair_handler.handle(NextPairQuery { voter }).await {
        Ok(proposal) => {
            let response: PairResponse = proposal.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ranking_error(e),
    }
}

/// POST /api/votes - Record one vote
pub async fn submit_vote(
    State(handlers): State<RankingHandlers>,
    RequireVoter(voter): RequireVoter,
    Json(req): Json<SubmitVoteRequest>,
) -> Response {
    let winner_id = match ItemId::new(req.winner_id) {
        Ok(id) => id,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };
    let loser_id = match ItemId::new(req.loser_id) {
        Ok(id) => id,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = SubmitVoteCommand {
        voter,
        winner_id,
        loser_id,
    };

    match handlers.submit_vote_handler.handle(cmd).await {
        Ok(receipt) => {
            let response: VoteResponse = receipt.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_ranking_error(e),
    }
}

/// GET /api/standings - Items sorted by descending rating
pub async fn standings(
    State(handlers): State<RankingHandlers>,
    RequireVoter(_voter): RequireVoter,
) -> Response {
    match handlers.standings_handler.handle().await {
        Ok(items) => {
            let response = StandingsResponse {
                items: items.into_iter().map(ItemResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ranking_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_ranking_error(error: RankingError) -> Response {
    match error {
        RankingError::ItemNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Item", &id.to_string())),
        )
            .into_response(),
        RankingError::NotAuthorized => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Voter is not authorized")),
        )
            .into_response(),
        RankingError::AlreadyVoted => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict("This pair was already voted on")),
        )
            .into_response(),
        RankingError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        RankingError::Infrastructure(msg) => {
            tracing::error!("Ranking infrastructure error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Nothing changed, try again")),
            )
                .into_response()
        }
    }
}
