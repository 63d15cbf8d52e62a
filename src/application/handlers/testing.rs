//! In-memory mock store shared by handler tests.
//!
//! One mutex guards the whole state so `record_vote` behaves like the single
//! serializable transaction the port demands, which lets tests race it.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, PairKey, VoterId};
use crate::domain::ranking::Item;
use crate::ports::{RankingStore, RatingUpdate};

#[derive(Default)]
struct State {
    items: BTreeMap<ItemId, Item>,
    voters: HashSet<VoterId>,
    votes: HashSet<(VoterId, PairKey)>,
}

pub struct MockRankingStore {
    state: Mutex<State>,
    fail_record_vote: bool,
}

impl MockRankingStore {
    /// Store with items "1".."n" seeded at the baseline rating.
    pub fn with_items(n: usize) -> Self {
        let mut state = State::default();
        for i in 1..=n {
            let id = ItemId::new(i.to_string()).unwrap();
            let item = Item::new(id.clone(), format!("Item {}", i)).unwrap();
            state.items.insert(id, item);
        }
        Self {
            state: Mutex::new(state),
            fail_record_vote: false,
        }
    }

    /// Adds a voter to the authorized set.
    pub fn authorize(self, voter: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .voters
            .insert(VoterId::new(voter).unwrap());
        self
    }

    /// Makes `record_vote` fail with a database error.
    pub fn failing_record_vote(mut self) -> Self {
        self.fail_record_vote = true;
        self
    }

    /// Marks a pair as already judged without touching ratings.
    pub fn mark_voted(&self, voter: &str, a: &str, b: &str) {
        let key = PairKey::new(&ItemId::new(a).unwrap(), &ItemId::new(b).unwrap()).unwrap();
        self.state
            .lock()
            .unwrap()
            .votes
            .insert((VoterId::new(voter).unwrap(), key));
    }

    /// Snapshot of one item for assertions.
    pub fn item(&self, id: &str) -> Item {
        let id = ItemId::new(id).unwrap();
        self.state.lock().unwrap().items.get(&id).unwrap().clone()
    }
}

#[async_trait]
impl RankingStore for MockRankingStore {
    async fn all_items(&self) -> Result<Vec<Item>, DomainError> {
        Ok(self.state.lock().unwrap().items.values().cloned().collect())
    }

    async fn find_item(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        Ok(self.state.lock().unwrap().items.get(id).cloned())
    }

    async fn is_authorized(&self, voter: &VoterId) -> Result<bool, DomainError> {
        Ok(self.state.lock().unwrap().voters.contains(voter))
    }

    async fn has_voted(&self, voter: &VoterId, pair: &PairKey) -> Result<bool, DomainError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .votes
            .contains(&(voter.clone(), pair.clone())))
    }

    async fn voted_pairs(&self, voter: &VoterId) -> Result<HashSet<PairKey>, DomainError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .votes
            .iter()
            .filter(|(v, _)| v == voter)
            .map(|(_, k)| k.clone())
            .collect())
    }

    async fn record_vote(
        &self,
        voter: &VoterId,
        pair: &PairKey,
        winner: RatingUpdate,
        loser: RatingUpdate,
    ) -> Result<(), DomainError> {
        if self.fail_record_vote {
            return Err(DomainError::new(ErrorCode::DatabaseError, "record_vote failed"));
        }

        let mut state = self.state.lock().unwrap();

        if state.votes.contains(&(voter.clone(), pair.clone())) {
            return Err(DomainError::new(ErrorCode::AlreadyVoted, "duplicate vote"));
        }
        if !state.items.contains_key(&winner.item_id) {
            return Err(
                DomainError::new(ErrorCode::ItemNotFound, "unknown winner")
                    .with_detail("item_id", winner.item_id.as_str()),
            );
        }
        if !state.items.contains_key(&loser.item_id) {
            return Err(
                DomainError::new(ErrorCode::ItemNotFound, "unknown loser")
                    .with_detail("item_id", loser.item_id.as_str()),
            );
        }

        state.votes.insert((voter.clone(), pair.clone()));

        let won = state.items.get(&winner.item_id).unwrap().clone();
        state.items.insert(
            winner.item_id.clone(),
            Item::reconstitute(
                winner.item_id.clone(),
                won.name().to_string(),
                winner.new_rating,
                won.wins() + 1,
                won.losses(),
            ),
        );

        let lost = state.items.get(&loser.item_id).unwrap().clone();
        state.items.insert(
            loser.item_id.clone(),
            Item::reconstitute(
                loser.item_id.clone(),
                lost.name().to_string(),
                loser.new_rating,
                lost.wins(),
                lost.losses() + 1,
            ),
        );

        Ok(())
    }
}
