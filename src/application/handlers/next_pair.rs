//! NextPairHandler - Query handler for the next unjudged pair.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::ranking::{pair_selector, Item, RankingError};
use crate::domain::foundation::VoterId;
use crate::ports::RankingStore;

/// Query for the next pair a voter should judge.
#[derive(Debug, Clone)]
pub struct NextPairQuery {
    pub voter: VoterId,
}

/// Outcome of pair selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PairProposal {
    /// Two items to present. Left/right assignment is display-only.
    Pair { left: Item, right: Item },
    /// The voter has judged every possible pair.
    Finished,
}

/// Handler that picks the next unjudged pair for a voter.
///
/// The RNG is injected at construction so callers control determinism;
/// production wiring seeds from entropy via `new`.
pub struct NextPairHandler {
    store: Arc<dyn RankingStore>,
    rng: Mutex<StdRng>,
}

impl NextPairHandler {
    pub fn new(store: Arc<dyn RankingStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng(store: Arc<dyn RankingStore>, rng: StdRng) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    pub async fn handle(&self, query: NextPairQuery) -> Result<PairProposal, RankingError> {
        // 1. Validate voter membership
        if !self.store.is_authorized(&query.voter).await? {
            return Err(RankingError::not_authorized());
        }

        // 2. Load the item set and this voter's judged pairs
        let items = self.store.all_items().await?;
        let seen = self.store.voted_pairs(&query.voter).await?;

        // 3. Pure selection over in-memory state. The lock is not held
        //    across an await point.
        let picked = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            pair_selector::next_pair(&items, &seen, &mut *rng)
        };

        match picked {
            Some((left, right)) => Ok(PairProposal::Pair { left, right }),
            None => Ok(PairProposal::Finished),
        }
    }
}
