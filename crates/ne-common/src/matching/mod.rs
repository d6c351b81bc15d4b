pub mod calibration;
pub mod encoder;
pub mod ranking;
pub mod reasons;
pub mod scoring;
pub mod weights;

pub use calibration::{calibrate_weights, CalibrationConfig, MatchOutcome, OutcomeRecord};
pub use encoder::{
    encode_candidate, encode_offer, CandidateFeatures, OfferFeatures, WorkPreferences,
};
pub use ranking::{rank_candidates, rank_matches, RankedMatch, RankingMode};
pub use reasons::generate_reasons;
pub use scoring::{
    score_compatibility, CompatibilityEngine, CompatibilityResult, DimensionScores, QualityLabel,
    ScoringConfig,
};
pub use weights::{MatchWeights, DEFAULT_WEIGHTS};
