//! Canonical pair key value object.
//!
//! The dedup invariant for votes hinges on one rule: (A, B) and (B, A) must
//! map to the same key. This module is the only place that rule lives; both
//! the selector and the store consume keys built here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ItemId, ValidationError};

/// Order-independent identifier for an unordered pair of item ids.
///
/// The two ids are joined with `|`, lexicographically smaller id first.
/// A pair of identical ids is not a pair and is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Builds the canonical key for two distinct item ids.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if both ids are equal (self-match)
    pub fn new(a: &ItemId, b: &ItemId) -> Result<Self, ValidationError> {
        if a == b {
            return Err(ValidationError::invalid_value(
                "pair",
                format!("item '{}' cannot be paired with itself", a),
            ));
        }
        let (first, second) = if a.as_str() < b.as_str() { (a, b) } else { (b, a) };
        Ok(Self(format!("{}|{}", first, second)))
    }

    /// Reconstitutes a key from its stored string form (no validation).
    pub fn from_stored(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    #[test]
    fn pair_key_is_order_independent() {
        let ab = PairKey::new(&id("a"), &id("b")).unwrap();
        let ba = PairKey::new(&id("b"), &id("a")).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn pair_key_puts_smaller_id_first() {
        let key = PairKey::new(&id("zebra"), &id("apple")).unwrap();
        assert_eq!(key.as_str(), "apple|zebra");
    }

    #[test]
    fn pair_key_rejects_self_match() {
        assert!(PairKey::new(&id("a"), &id("a")).is_err());
    }

    #[test]
    fn pair_keys_for_distinct_pairs_differ() {
        let ab = PairKey::new(&id("a"), &id("b")).unwrap();
        let ac = PairKey::new(&id("a"), &id("c")).unwrap();
        assert_ne!(ab, ac);
    }

    #[test]
    fn pair_key_round_trips_through_stored_form() {
        let key = PairKey::new(&id("1"), &id("2")).unwrap();
        let restored = PairKey::from_stored(key.as_str());
        assert_eq!(key, restored);
    }
}
