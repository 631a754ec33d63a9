mod search_dto;

pub use search_dto::{MatchPairDto, SearchRequestDto, SearchResponseDto};
