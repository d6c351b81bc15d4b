use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::encoder::{encode_candidate, encode_offer};
use super::scoring::{CompatibilityEngine, CompatibilityResult};
use super::weights::MatchWeights;
use crate::error::MatchError;
use crate::{CandidateProfile, JobOffer};

/// Resultado con su posición dentro del lote (empezando en 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub rank: usize,
    pub result: CompatibilityResult,
}

/// Política ante pares malformados dentro de un lote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingMode {
    /// descarta el par con un aviso y sigue con el resto del lote
    #[default]
    Lenient,
    /// el primer par inválido hace fallar la llamada completa
    Strict,
}

impl CompatibilityEngine {
    /// Mejores ofertas para un candidato. Cada par se puntúa de forma
    /// independiente (sin estado compartido); la ordenación es descendente
    /// por total con desempate determinista por id ascendente.
    /// `top_k == 0` o lote vacío → resultado vacío, no error; con menos de
    /// `top_k` candidatos se devuelven todos.
    pub fn rank_offers_for_candidate(
        &self,
        candidate: &CandidateProfile,
        offers: &[JobOffer],
        top_k: usize,
        mode: RankingMode,
    ) -> Result<Vec<RankedMatch>, MatchError> {
        candidate.validate()?;
        if top_k == 0 || offers.is_empty() {
            return Ok(Vec::new());
        }

        let candidate_features = encode_candidate(candidate);
        let mut results = Vec::with_capacity(offers.len());

        for offer in offers {
            if let Err(err) = offer.validate() {
                match mode {
                    RankingMode::Strict => return Err(err),
                    RankingMode::Lenient => {
                        warn!(offer_id = %offer.id, error = %err, "offer dropped from batch");
                        continue;
                    }
                }
            }
            let offer_features = encode_offer(offer);
            results.push(self.score_encoded(&candidate_features, &offer_features));
        }

        Ok(finish_ranking(results, top_k))
    }

    /// Mejores candidatos para una oferta (dirección inversa, misma
    /// semántica de ordenación y desempate).
    pub fn rank_candidates_for_offer(
        &self,
        offer: &JobOffer,
        candidates: &[CandidateProfile],
        top_k: usize,
        mode: RankingMode,
    ) -> Result<Vec<RankedMatch>, MatchError> {
        offer.validate()?;
        if top_k == 0 || candidates.is_empty() {
            return Ok(Vec::new());
        }

        let offer_features = encode_offer(offer);
        let mut results = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            if let Err(err) = candidate.validate() {
                match mode {
                    RankingMode::Strict => return Err(err),
                    RankingMode::Lenient => {
                        warn!(candidate_id = %candidate.id, error = %err, "candidate dropped from batch");
                        continue;
                    }
                }
            }
            let candidate_features = encode_candidate(candidate);
            results.push(self.score_encoded(&candidate_features, &offer_features));
        }

        Ok(finish_ranking(results, top_k))
    }
}

fn finish_ranking(mut results: Vec<CompatibilityResult>, top_k: usize) -> Vec<RankedMatch> {
    results.sort_by(|a, b| {
        match b
            .total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
        {
            // dentro de un lote uno de los dos ids es constante, así que
            // comparar el par equivale a comparar el id de la contraparte
            Ordering::Equal => (a.candidate_id.as_str(), a.offer_id.as_str())
                .cmp(&(b.candidate_id.as_str(), b.offer_id.as_str())),
            other => other,
        }
    });
    results.truncate(top_k);

    results
        .into_iter()
        .enumerate()
        .map(|(i, result)| RankedMatch {
            rank: i + 1,
            result,
        })
        .collect()
}

/// Mejores ofertas para un candidato con los pesos indicados (modo
/// tolerante: los pares malformados se descartan con aviso).
pub fn rank_matches(
    candidate: &CandidateProfile,
    offers: &[JobOffer],
    weights: MatchWeights,
    top_k: usize,
) -> Result<Vec<RankedMatch>, MatchError> {
    CompatibilityEngine::new(weights)?.rank_offers_for_candidate(
        candidate,
        offers,
        top_k,
        RankingMode::Lenient,
    )
}

/// Mejores candidatos para una oferta con los pesos indicados.
pub fn rank_candidates(
    offer: &JobOffer,
    candidates: &[CandidateProfile],
    weights: MatchWeights,
    top_k: usize,
) -> Result<Vec<RankedMatch>, MatchError> {
    CompatibilityEngine::new(weights)?.rank_candidates_for_offer(
        offer,
        candidates,
        top_k,
        RankingMode::Lenient,
    )
}
