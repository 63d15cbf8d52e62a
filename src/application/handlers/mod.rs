//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod get_standings;
mod next_pair;
mod submit_vote;

#[cfg(test)]
pub(crate) mod testing;

pub use get_standings::GetStandingsHandler;
pub use next_pair::{NextPairHandler, NextPairQuery, PairProposal};
pub use submit_vote::{SubmitVoteCommand, SubmitVoteHandler, VoteReceipt};
