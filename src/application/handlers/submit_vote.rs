//! SubmitVoteHandler - Command handler for recording one vote.

use std::sync::Arc;

use crate::domain::foundation::{ItemId, PairKey, VoterId};
use crate::domain::ranking::{elo, RankingError};
use crate::ports::{RankingStore, RatingUpdate};

/// Command naming the winner and loser of one matchup.
#[derive(Debug, Clone)]
pub struct SubmitVoteCommand {
    pub voter: VoterId,
    pub winner_id: ItemId,
    pub loser_id: ItemId,
}

/// Result of a successfully recorded vote.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteReceipt {
    pub winner_id: ItemId,
    pub loser_id: ItemId,
    pub winner_rating: f64,
    pub loser_rating: f64,
}

/// Handler that turns one submitted matchup into a recorded vote.
///
/// The flow re-fetches both ratings, runs the Elo model, and hands the
/// results to the store's atomic `record_vote`. The store's dedup check is
/// the safety boundary: if a concurrent submission wins the race, this one
/// surfaces `AlreadyVoted` and nothing mutates.
pub struct SubmitVoteHandler {
    store: Arc<dyn RankingStore>,
}

impl SubmitVoteHandler {
    pub fn new(store: Arc<dyn RankingStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitVoteCommand) -> Result<VoteReceipt, RankingError> {
        // 1. Validate voter membership
        if !self.store.is_authorized(&cmd.voter).await? {
            return Err(RankingError::not_authorized());
        }

        // 2. Canonical pair key; rejects a self-match up front
        let pair = PairKey::new(&cmd.winner_id, &cmd.loser_id)
            .map_err(|e| RankingError::validation("pair", e.to_string()))?;

        // 3. Re-fetch current ratings; unknown ids come from untrusted input
        let winner = self
            .store
            .find_item(&cmd.winner_id)
            .await?
            .ok_or_else(|| RankingError::item_not_found(cmd.winner_id.clone()))?;
        let loser = self
            .store
            .find_item(&cmd.loser_id)
            .await?
            .ok_or_else(|| RankingError::item_not_found(cmd.loser_id.clone()))?;

        // 4. Pure rating computation
        let update = elo::update(winner.rating(), loser.rating());

        // 5. Atomic persistence: dedup record + both item rows, or nothing
        self.store
            .record_vote(
                &cmd.voter,
                &pair,
                RatingUpdate::new(cmd.winner_id.clone(), update.winner_rating),
                RatingUpdate::new(cmd.loser_id.clone(), update.loser_rating),
            )
            .await?;

        Ok(VoteReceipt {
            winner_id: cmd.winner_id,
            loser_id: cmd.loser_id,
            winner_rating: update.winner_rating,
            loser_rating: update.loser_rating,
        })
    }
}
