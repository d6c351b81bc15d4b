use serde::{Deserialize, Serialize};

use super::match_request::MatchRequest;
use crate::error::MatchError;
use crate::matching::{CompatibilityEngine, RankedMatch, RankingMode};

/// Versión del motor, incluida en cada respuesta para trazabilidad.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Respuesta de matching para el CRM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub candidate_id: String,
    pub matches: Vec<RankedMatch>,
    pub engine_version: String,
    /// versión del vector de pesos con el que se puntuó el lote
    pub weights_version: u32,
}

/// Resuelve una petición completa: construye el motor con los pesos de la
/// petición (o los por defecto), clasifica y envuelve el resultado con los
/// metadatos de versión.
pub fn handle_match_request(request: &MatchRequest) -> Result<MatchResponse, MatchError> {
    let weights = request.weights.unwrap_or_default();
    let engine = CompatibilityEngine::new(weights)?;
    let mode = if request.strict {
        RankingMode::Strict
    } else {
        RankingMode::Lenient
    };

    let matches =
        engine.rank_offers_for_candidate(&request.candidate, &request.offers, request.top_k, mode)?;

    Ok(MatchResponse {
        candidate_id: request.candidate.id.clone(),
        matches,
        engine_version: ENGINE_VERSION.to_string(),
        weights_version: weights.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{MatchWeights, DEFAULT_WEIGHTS};
    use crate::{CandidateProfile, JobOffer};

    fn request() -> MatchRequest {
        MatchRequest {
            candidate: CandidateProfile {
                id: "cand-1".into(),
                neurodivergence_type: Some("TDAH".into()),
                ..CandidateProfile::default()
            },
            offers: vec![
                JobOffer {
                    id: "of-1".into(),
                    company_id: "emp-1".into(),
                    work_mode: Some("remoto".into()),
                    target_neurodivergences: vec!["TDAH".into()],
                    ..JobOffer::default()
                },
                JobOffer {
                    id: "of-2".into(),
                    company_id: "emp-2".into(),
                    work_mode: Some("presencial".into()),
                    location: Some("Barcelona".into()),
                    target_neurodivergences: vec!["TEA".into()],
                    ..JobOffer::default()
                },
            ],
            weights: None,
            top_k: 10,
            strict: false,
        }
    }

    #[test]
    fn handles_request_with_default_weights() {
        let response = handle_match_request(&request()).unwrap();

        assert_eq!(response.candidate_id, "cand-1");
        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].result.offer_id, "of-1");
        assert_eq!(response.weights_version, DEFAULT_WEIGHTS.version);
        assert_eq!(response.engine_version, ENGINE_VERSION);
    }

    #[test]
    fn rejects_invalid_request_weights() {
        let mut request = request();
        request.weights = Some(MatchWeights {
            skills: -0.5,
            ..DEFAULT_WEIGHTS
        });
        assert!(handle_match_request(&request).is_err());
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = handle_match_request(&request()).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let back: MatchResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
