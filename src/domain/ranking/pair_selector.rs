//! Next-pair selection.
//!
//! Enumerates unordered pairs over a shuffled copy of the item list and
//! returns the first one the voter has not judged. The shuffle only varies
//! presentation; correctness rests on the scan covering every pair, so a
//! voter who keeps voting exhausts all `n*(n-1)/2` candidates and then gets
//! `None`. Left/right position of the returned items carries no meaning.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::foundation::PairKey;
use crate::domain::ranking::Item;

/// Picks the next pair the voter has not judged, or `None` when the voter
/// has judged every pair (or fewer than two items exist).
pub fn next_pair<R: Rng>(
    items: &[Item],
    seen: &HashSet<PairKey>,
    rng: &mut R,
) -> Option<(Item, Item)> {
    let mut shuffled: Vec<&Item> = items.iter().collect();
    shuffled.shuffle(rng);

    for i in 0..shuffled.len() {
        for j in (i + 1)..shuffled.len() {
            let key = match PairKey::new(shuffled[i].id(), shuffled[j].id()) {
                Ok(key) => key,
                // Duplicate ids cannot form a pair; skip rather than stall.
                Err(_) => continue,
            };
            if !seen.contains(&key) {
                return Some((shuffled[i].clone(), shuffled[j].clone()));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ItemId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(id: &str) -> Item {
        Item::new(ItemId::new(id).unwrap(), format!("Item {}", id)).unwrap()
    }

    fn items(n: usize) -> Vec<Item> {
        (1..=n).map(|i| item(&i.to_string())).collect()
    }

    fn key(a: &Item, b: &Item) -> PairKey {
        PairKey::new(a.id(), b.id()).unwrap()
    }

    #[test]
    fn fresh_voter_with_two_items_gets_a_pair() {
        let items = items(2);
        let mut rng = StdRng::seed_from_u64(7);
        let pair = next_pair(&items, &HashSet::new(), &mut rng);
        assert!(pair.is_some());
    }

    #[test]
    fn fewer_than_two_items_means_finished() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_pair(&[], &HashSet::new(), &mut rng).is_none());
        assert!(next_pair(&items(1), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn never_returns_a_judged_pair() {
        let items = items(4);
        let mut seen = HashSet::new();
        seen.insert(key(&items[0], &items[1]));
        seen.insert(key(&items[0], &items[2]));

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let (left, right) = next_pair(&items, &seen, &mut rng).unwrap();
            let offered = PairKey::new(left.id(), right.id()).unwrap();
            assert!(!seen.contains(&offered));
        }
    }

    #[test]
    fn voter_who_judged_everything_is_finished() {
        let items = items(4);
        let mut seen = HashSet::new();
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                seen.insert(key(&items[i], &items[j]));
            }
        }

        let mut rng = StdRng::seed_from_u64(3);
        assert!(next_pair(&items, &seen, &mut rng).is_none());
    }

    #[test]
    fn repeated_voting_exhausts_all_pairs() {
        let items = items(8);
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(11);

        let mut rounds = 0;
        while let Some((left, right)) = next_pair(&items, &seen, &mut rng) {
            seen.insert(PairKey::new(left.id(), right.id()).unwrap());
            rounds += 1;
            assert!(rounds <= 28, "selector must terminate within n*(n-1)/2 votes");
        }
        assert_eq!(rounds, 28);
    }
}
