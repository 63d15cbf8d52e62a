//! Item entity.
//!
//! Items are seeded out-of-band with a stable id and a display name. The only
//! mutation path is the vote-recording transaction, which writes a fresh
//! rating and bumps one counter per side.

use crate::domain::foundation::{DomainError, ItemId, ValidationError};
use serde::{Deserialize, Serialize};

/// Rating every item starts at before any vote.
pub const BASELINE_RATING: f64 = 1200.0;

/// A ranked item.
///
/// # Invariants
///
/// - `id` is globally unique and never changes
/// - `name` is immutable after seeding
/// - `rating` is finite and changes only through the vote transaction
/// - `wins + losses` equals the number of votes this item appeared in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    id: ItemId,

    /// Display name.
    name: String,

    /// Elo strength estimate.
    rating: f64,

    /// Votes this item won.
    wins: u32,

    /// Votes this item lost.
    losses: u32,
}

impl Item {
    /// Create a fresh item at the baseline rating.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty
    pub fn new(id: ItemId, name: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        Ok(Self {
            id,
            name,
            rating: BASELINE_RATING,
            wins: 0,
            losses: 0,
        })
    }

    /// Reconstitute an item from persistence (no validation).
    pub fn reconstitute(id: ItemId, name: String, rating: f64, wins: u32, losses: u32) -> Self {
        Self {
            id,
            name,
            rating,
            wins,
            losses,
        }
    }

    /// Returns the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns the win count.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the loss count.
    pub fn losses(&self) -> u32 {
        self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_at_baseline_with_zero_counters() {
        let item = Item::new(ItemId::new("1").unwrap(), "Alpha".to_string()).unwrap();
        assert_eq!(item.rating(), BASELINE_RATING);
        assert_eq!(item.wins(), 0);
        assert_eq!(item.losses(), 0);
    }

    #[test]
    fn new_item_rejects_blank_name() {
        let result = Item::new(ItemId::new("1").unwrap(), "   ".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn reconstitute_preserves_all_fields() {
        let item = Item::reconstitute(ItemId::new("2").unwrap(), "Beta".to_string(), 1216.0, 3, 1);
        assert_eq!(item.id().as_str(), "2");
        assert_eq!(item.name(), "Beta");
        assert_eq!(item.rating(), 1216.0);
        assert_eq!(item.wins(), 3);
        assert_eq!(item.losses(), 1);
    }
}
