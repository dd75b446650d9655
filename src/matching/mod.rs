//! Title-to-client matching.
//!
//! This module contains the normalization rules shared with the
//! confirmation ledger and the tiered confidence matcher.

mod matcher;
mod normalize;

pub use matcher::{
    MatchCandidate, MatchConfidence, UncertainMatch, find_client_matches,
    find_client_matches_with_confidence,
};
pub use normalize::{normalize_title, tokenize};
