//! HTTP DTOs for ranking endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{PairProposal, VoteReceipt};
use crate::domain::ranking::Item;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to verify a passcode.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub passcode: String,
}

/// Request to record one vote.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitVoteRequest {
    pub winner_id: String,
    pub loser_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One item as rendered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub wins: u32,
    pub losses: u32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            rating: item.rating(),
            wins: item.wins(),
            losses: item.losses(),
        }
    }
}

/// The next pair to judge, or the finished flag.
#[derive(Debug, Clone, Serialize)]
pub struct PairResponse {
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<ItemResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<ItemResponse>,
}

impl From<PairProposal> for PairResponse {
    fn from(proposal: PairProposal) -> Self {
        match proposal {
            PairProposal::Pair { left, right } => Self {
                finished: false,
                left: Some(left.into()),
                right: Some(right.into()),
            },
            PairProposal::Finished => Self {
                finished: true,
                left: None,
                right: None,
            },
        }
    }
}

/// Post-vote ratings for the two items.
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub winner_id: String,
    pub loser_id: String,
    pub winner_rating: f64,
    pub loser_rating: f64,
}

impl From<VoteReceipt> for VoteResponse {
    fn from(receipt: VoteReceipt) -> Self {
        Self {
            winner_id: receipt.winner_id.to_string(),
            loser_id: receipt.loser_id.to_string(),
            winner_rating: receipt.winner_rating,
            loser_rating: receipt.loser_rating,
        }
    }
}

/// Items sorted by descending rating.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsResponse {
    pub items: Vec<ItemResponse>,
}

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "VOTER_NOT_AUTHORIZED".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "ALREADY_VOTED".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ItemId;

    #[test]
    fn item_response_carries_all_fields() {
        let item = Item::reconstitute(ItemId::new("1").unwrap(), "Alpha".into(), 1216.0, 1, 0);
        let response: ItemResponse = item.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1", "name": "Alpha", "rating": 1216.0, "wins": 1, "losses": 0
            })
        );
    }

    #[test]
    fn finished_proposal_serializes_without_items() {
        let response: PairResponse = PairProposal::Finished.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "finished": true }));
    }

    #[test]
    fn pair_proposal_serializes_both_sides() {
        let left = Item::new(ItemId::new("1").unwrap(), "Alpha".into()).unwrap();
        let right = Item::new(ItemId::new("2").unwrap(), "Beta".into()).unwrap();
        let response: PairResponse = PairProposal::Pair { left, right }.into();
        assert!(!response.finished);
        assert_eq!(response.left.unwrap().id, "1");
        assert_eq!(response.right.unwrap().id, "2");
    }

    #[test]
    fn submit_vote_request_deserializes() {
        let req: SubmitVoteRequest =
            serde_json::from_str(r#"{"winner_id": "1", "loser_id": "2"}"#).unwrap();
        assert_eq!(req.winner_id, "1");
        assert_eq!(req.loser_id, "2");
    }
}
