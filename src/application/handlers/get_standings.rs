//! GetStandingsHandler - Query handler for the ranked results view.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::ranking::{Item, RankingError};
use crate::ports::RankingStore;

/// Handler that returns all items ordered for display.
///
/// Sorted by rating descending; ties fall back to ascending item id so the
/// board renders deterministically.
pub struct GetStandingsHandler {
    store: Arc<dyn RankingStore>,
}

impl GetStandingsHandler {
    pub fn new(store: Arc<dyn RankingStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Item>, RankingError> {
        let mut items = self.store.all_items().await?;
        items.sort_by(|a, b| {
            b.rating()
                .partial_cmp(&a.rating())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(items)
    }
}
