use serde::Deserialize;

use crate::matching::MatchWeights;
use crate::{CandidateProfile, JobOffer};

/// Petición de matching procedente del CRM.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub candidate: CandidateProfile,
    pub offers: Vec<JobOffer>,
    /// vector de pesos opcional; en su ausencia se usa el vector por defecto
    #[serde(default)]
    pub weights: Option<MatchWeights>,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// en modo estricto un par inválido hace fallar todo el lote
    #[serde(default)]
    pub strict: bool,
}

fn default_top_k() -> usize {
    10
}
