pub mod match_request;
pub mod match_response;

pub use match_request::MatchRequest;
pub use match_response::{handle_match_request, MatchResponse, ENGINE_VERSION};
