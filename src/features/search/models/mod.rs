mod search_outcome;

pub use search_outcome::{MatchPair, SearchOutcome, SearchStatus};
