//! Candidate selection: eligibility filtering and ranking

pub mod filter;
pub mod rank;

pub use filter::{select_candidates, select_weapons, SearchScope};
pub use rank::{rank_best, weapon_class, Ranker};
