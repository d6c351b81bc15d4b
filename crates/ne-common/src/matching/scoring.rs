use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::encoder::{encode_candidate, encode_offer, CandidateFeatures, OfferFeatures};
use super::reasons::generate_reasons;
use super::weights::MatchWeights;
use crate::error::MatchError;
use crate::vocab::{same_commuting_area, WorkMode};
use crate::{CandidateProfile, JobOffer};

/// Matriz de compatibilidad de experiencia (constante de diseño, no se
/// calcula). Filas: nivel inferido del candidato; columnas: nivel requerido.
/// Coincidencia exacta 1.0; la sobrecualificación puntúa mejor que la falta
/// de experiencia.
pub const EXPERIENCE_MATRIX: [[f64; 3]; 3] = [
    // requerido:   junior  mid  senior
    /* junior */ [1.0, 0.6, 0.3],
    /* mid    */ [0.9, 1.0, 0.6],
    /* senior */ [0.8, 0.9, 1.0],
];

/// Constantes de ajuste de los puntuadores. Son valores de tuning con
/// nombre, pensados para refinarse con el calibrador, no verdades absolutas.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Crédito parcial cuando la oferta no lista el tipo del candidato
    pub nd_partial_credit: f64,
    /// Base cuando hay texto de requisitos pero sin palabras clave extraíbles
    pub skills_no_keywords_baseline: f64,
    /// Base cuando el candidato no solicita adaptaciones (no 1.0: siempre
    /// queda algo de riesgo de desajuste)
    pub accommodations_no_needs_baseline: f64,
    /// Suelo cuando nada coincide y ninguna solicitud se reconoció en el
    /// vocabulario canónico
    pub accommodations_unrecognized_floor: f64,
    pub location_hybrid_city_match: f64,
    pub location_hybrid_city_mismatch: f64,
    pub location_onsite_mismatch_floor: f64,
    /// Valor neutro documentado cuando falta el municipio de alguna parte
    pub location_unknown_city: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            nd_partial_credit: env_nd_partial_credit(),
            skills_no_keywords_baseline: 0.3,
            accommodations_no_needs_baseline: 0.8,
            accommodations_unrecognized_floor: 0.3,
            location_hybrid_city_match: 0.8,
            location_hybrid_city_mismatch: 0.4,
            location_onsite_mismatch_floor: 0.2,
            location_unknown_city: 0.6,
        }
    }
}

fn env_nd_partial_credit() -> f64 {
    std::env::var("NE_ND_PARTIAL_CREDIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.3)
}

/// Subpuntuaciones por dimensión, todas en [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub neurodivergence: f64,
    pub skills: f64,
    pub location: f64,
    pub accommodations: f64,
    pub experience: f64,
}

impl DimensionScores {
    /// `total = 100 · Σ(w_d · s_d) / Σ(w_d)`, acotado a [0,100] frente a la
    /// deriva de coma flotante. Si los pesos no suman 1.0 se renormalizan
    /// aquí; la validación dura ocurrió al cargarlos.
    pub fn weighted_total(&self, weights: &MatchWeights) -> f64 {
        let sum = weights.sum();
        if sum <= 0.0 {
            return 0.0;
        }

        let combined = self.neurodivergence * weights.neurodivergence
            + self.skills * weights.skills
            + self.location * weights.location
            + self.accommodations * weights.accommodations
            + self.experience * weights.experience;

        (100.0 * combined / sum).clamp(0.0, 100.0)
    }
}

/// 1.0 si la oferta busca explícitamente el tipo del candidato o está
/// abierta a todas; crédito parcial si no lo lista. Monótono: estar listado
/// nunca puntúa por debajo de no estarlo.
pub fn score_neurodivergence(
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
    config: &ScoringConfig,
) -> f64 {
    if offer.targets.targets(candidate.neurotype) {
        1.0
    } else {
        config.nd_partial_credit.clamp(0.0, 1.0)
    }
}

/// `|intersección| / max(1, |requisitos|)`. Oferta sin texto de requisitos →
/// lectura más permisiva (1.0); texto presente sin palabras clave
/// extraíbles → base configurable.
pub fn score_skills(
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
    config: &ScoringConfig,
) -> f64 {
    match &offer.requirement_keywords {
        None => 1.0,
        Some(required) if required.is_empty() => {
            config.skills_no_keywords_baseline.clamp(0.0, 1.0)
        }
        Some(required) => {
            let matched = required.intersection(&candidate.skills).count();
            (matched as f64 / required.len().max(1) as f64).clamp(0.0, 1.0)
        }
    }
}

pub fn score_location(
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
    config: &ScoringConfig,
) -> f64 {
    let score = match offer.work_mode {
        // en remoto (o modalidad sin especificar: lectura más permisiva)
        // el municipio es irrelevante
        WorkMode::Remoto | WorkMode::SinEspecificar => 1.0,
        WorkMode::Hibrido => match (&candidate.city, &offer.city) {
            (Some(c), Some(o)) if same_commuting_area(c, o) => config.location_hybrid_city_match,
            (Some(_), Some(_)) => config.location_hybrid_city_mismatch,
            _ => config.location_unknown_city,
        },
        WorkMode::Presencial => match (&candidate.city, &offer.city) {
            (Some(c), Some(o)) if same_commuting_area(c, o) => 1.0,
            (Some(_), Some(_)) => config.location_onsite_mismatch_floor,
            _ => config.location_unknown_city,
        },
    };
    score.clamp(0.0, 1.0)
}

pub fn score_accommodations(
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
    config: &ScoringConfig,
) -> f64 {
    let needed = &candidate.accommodations_needed;
    if needed.is_empty() {
        return config.accommodations_no_needs_baseline.clamp(0.0, 1.0);
    }

    let covered = needed
        .intersection(&offer.accommodations_available)
        .count();
    if covered == 0 && candidate.recognized_needs == 0 {
        // solicitudes en texto libre fuera del vocabulario: no se castiga a cero
        return config.accommodations_unrecognized_floor.clamp(0.0, 1.0);
    }

    (covered as f64 / needed.len() as f64).clamp(0.0, 1.0)
}

/// Oferta sin nivel requerido → lectura más permisiva (1.0); con nivel, la
/// matriz de diseño.
pub fn score_experience(candidate: &CandidateFeatures, offer: &OfferFeatures) -> f64 {
    match offer.required_level {
        None => 1.0,
        Some(required) => EXPERIENCE_MATRIX[candidate.level.index()][required.index()],
    }
}

/// Tramos del total; los comparte el titular de los motivos.
pub const EXCELLENT_THRESHOLD: f64 = 90.0;
pub const VERY_GOOD_THRESHOLD: f64 = 80.0;
pub const GOOD_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    Excelente,
    MuyBueno,
    Bueno,
    Bajo,
}

impl QualityLabel {
    pub fn from_total(total: f64) -> Self {
        if total >= EXCELLENT_THRESHOLD {
            QualityLabel::Excelente
        } else if total >= VERY_GOOD_THRESHOLD {
            QualityLabel::MuyBueno
        } else if total >= GOOD_THRESHOLD {
            QualityLabel::Bueno
        } else {
            QualityLabel::Bajo
        }
    }
}

/// Resultado de compatibilidad de un par candidato-oferta. Se produce fresco
/// en cada llamada y nunca se muta; cacheable por
/// `(candidate_id, offer_id, weights_version)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub candidate_id: String,
    pub offer_id: String,
    /// total agregado en [0,100]
    pub total_score: f64,
    pub breakdown: DimensionScores,
    /// motivos legibles, ordenados
    pub reasons: Vec<String>,
    pub quality: QualityLabel,
    pub weights_version: u32,
}

pub struct CompatibilityEngine {
    weights: MatchWeights,
    config: ScoringConfig,
}

impl CompatibilityEngine {
    /// Toma una instantánea del vector de pesos: un lote en curso no se ve
    /// afectado por una recalibración concurrente.
    pub fn new(weights: MatchWeights) -> Result<Self, MatchError> {
        Self::with_config(weights, ScoringConfig::default())
    }

    pub fn with_config(weights: MatchWeights, config: ScoringConfig) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self { weights, config })
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Puntúa un par ya codificado. Función total: cualquier combinación de
    /// features produce cinco valores en [0,1].
    pub fn score_features(
        &self,
        candidate: &CandidateFeatures,
        offer: &OfferFeatures,
    ) -> DimensionScores {
        DimensionScores {
            neurodivergence: score_neurodivergence(candidate, offer, &self.config),
            skills: score_skills(candidate, offer, &self.config),
            location: score_location(candidate, offer, &self.config),
            accommodations: score_accommodations(candidate, offer, &self.config),
            experience: score_experience(candidate, offer),
        }
    }

    /// Puntuación de un par con validación del contrato mínimo de entrada.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        offer: &JobOffer,
    ) -> Result<CompatibilityResult, MatchError> {
        candidate.validate()?;
        offer.validate()?;

        let candidate_features = encode_candidate(candidate);
        let offer_features = encode_offer(offer);
        Ok(self.score_encoded(&candidate_features, &offer_features))
    }

    pub(crate) fn score_encoded(
        &self,
        candidate: &CandidateFeatures,
        offer: &OfferFeatures,
    ) -> CompatibilityResult {
        let breakdown = self.score_features(candidate, offer);
        let total_score = breakdown.weighted_total(&self.weights);
        let reasons = generate_reasons(&breakdown, total_score, candidate, offer);

        CompatibilityResult {
            candidate_id: candidate.id.clone(),
            offer_id: offer.id.clone(),
            total_score,
            breakdown,
            reasons,
            quality: QualityLabel::from_total(total_score),
            weights_version: self.weights.version,
        }
    }
}

/// Puntuación puntual ("¿cómo encaja X con Y?") con los pesos indicados.
pub fn score_compatibility(
    candidate: &CandidateProfile,
    offer: &JobOffer,
    weights: MatchWeights,
) -> Result<CompatibilityResult, MatchError> {
    CompatibilityEngine::new(weights)?.score(candidate, offer)
}
