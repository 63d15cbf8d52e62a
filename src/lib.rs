//! Duelrank - Pairwise Ranking Service
//!
//! A closed set of authorized voters compares items head-to-head; Elo rating
//! updates converge on a global ranking. Votes are deduplicated per voter and
//! unordered pair, and each vote's effects land in one atomic transaction.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
