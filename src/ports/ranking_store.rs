//! Ranking store port.
//!
//! Defines the durable-state contract for items, authorized voters, and vote
//! records. Implementations own the only transactional boundary in the
//! system: `record_vote`.
//!
//! # Design
//!
//! - **Sole arbiter**: the store enforces "exactly one vote per (voter,
//!   unordered pair)". The selector's candidate exclusion is a UI
//!   optimization, not the safety boundary.
//! - **No caching**: every vote re-fetches current ratings, so the loser of a
//!   concurrent race is rejected by the dedup check instead of applying a
//!   stale update.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ItemId, PairKey, VoterId};
use crate::domain::ranking::Item;

/// Post-vote rating for one side of a recorded vote.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingUpdate {
    pub item_id: ItemId,
    pub new_rating: f64,
}

impl RatingUpdate {
    pub fn new(item_id: ItemId, new_rating: f64) -> Self {
        Self { item_id, new_rating }
    }
}

/// Durable storage port for the ranking engine.
#[async_trait]
pub trait RankingStore: Send + Sync {
    /// All items, in stable id order.
    ///
    /// Callers sort by rating for display; the stable order here only keeps
    /// ties deterministic.
    async fn all_items(&self) -> Result<Vec<Item>, DomainError>;

    /// Point lookup for one item. Returns `None` if unknown.
    async fn find_item(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;

    /// Whether this voter identity is in the authorized set.
    async fn is_authorized(&self, voter: &VoterId) -> Result<bool, DomainError>;

    /// Whether this voter already judged this unordered pair.
    async fn has_voted(&self, voter: &VoterId, pair: &PairKey) -> Result<bool, DomainError>;

    /// Every pair key this voter has judged, for candidate exclusion.
    async fn voted_pairs(&self, voter: &VoterId) -> Result<HashSet<PairKey>, DomainError>;

    /// Atomically records a vote: inserts the dedup record, applies the
    /// winner's new rating and win, applies the loser's new rating and loss.
    /// All three effects land or none do.
    ///
    /// # Errors
    ///
    /// - `AlreadyVoted` if a record for (voter, pair) exists; nothing mutates
    /// - `ItemNotFound` if either item id is unknown; nothing mutates
    /// - `DatabaseError` on transaction failure; nothing mutates
    async fn record_vote(
        &self,
        voter: &VoterId,
        pair: &PairKey,
        winner: RatingUpdate,
        loser: RatingUpdate,
    ) -> Result<(), DomainError>;
}
