//! Elo rating model.
//!
//! Pure computation: one decided matchup in, two post-vote ratings out.
//! Persistence and win/loss counters are the store's job.

/// Fixed K-factor applied to every vote.
pub const K_FACTOR: f64 = 32.0;

/// Scale constant in the expected-score formula.
const RATING_SCALE: f64 = 400.0;

/// Post-vote ratings for both sides of a matchup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EloUpdate {
    pub winner_rating: f64,
    pub loser_rating: f64,
}

/// Computes post-vote ratings for a decided matchup.
///
/// Expected winner score is `1 / (1 + 10^((R_l - R_w) / 400))`; the winner
/// gains `K * (1 - E_w)` and the loser gives up exactly the same amount, so
/// no global renormalization is ever needed. Total over finite inputs.
pub fn update(winner_rating: f64, loser_rating: f64) -> EloUpdate {
    let expected_win = 1.0 / (1.0 + 10f64.powf((loser_rating - winner_rating) / RATING_SCALE));
    let transfer = K_FACTOR * (1.0 - expected_win);

    EloUpdate {
        winner_rating: winner_rating + transfer,
        loser_rating: loser_rating - transfer,
    }
}
