pub mod match_outcome;
pub mod matching_engine;

pub use match_outcome::MatchOutcome;
pub use matching_engine::MatchingEngine;
