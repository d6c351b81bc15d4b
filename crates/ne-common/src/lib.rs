pub mod api;
pub mod error;
pub mod logging;
pub mod matching;
pub mod skill_keywords;
pub mod vocab;

use serde::{Deserialize, Serialize};

use error::MatchError;

// Commonly used data models for matching functions. The CRM layer fills these
// from storage; the engine only reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Identificador opaco asignado en el registro
    pub id: String,
    /// Tipo de neurodivergencia declarado (texto libre del formulario)
    pub neurodivergence_type: Option<String>,
    /// Aptitudes en texto libre
    pub skills_text: Option<String>,
    /// Experiencia en texto libre (se infiere un nivel aproximado)
    pub experience_text: Option<String>,
    pub city: Option<String>,
    /// Flags de preferencia: remoto / horario flexible / entorno tranquilo
    #[serde(default)]
    pub work_preferences: Vec<String>,
    /// Adaptaciones solicitadas (vocabulario abierto)
    #[serde(default)]
    pub accommodations_needed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: String,
    pub company_id: String,
    pub title: Option<String>,
    pub description_text: Option<String>,
    pub location: Option<String>,
    /// remoto / híbrido / presencial (texto libre del formulario)
    pub work_mode: Option<String>,
    /// Neurodivergencias a las que va dirigida; puede incluir "todas"
    #[serde(default)]
    pub target_neurodivergences: Vec<String>,
    #[serde(default)]
    pub accommodations_available: Vec<String>,
    pub required_experience_level: Option<String>,
    pub requirements_text: Option<String>,
}

impl CandidateProfile {
    /// Contrato mínimo de campos obligatorios (categoría (a) del diseño de
    /// errores): sólo el id es imprescindible; todo lo demás degrada a
    /// valores neutros en el codificador.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.id.trim().is_empty() {
            return Err(MatchError::InvalidCandidate {
                id: self.id.clone(),
                reason: "candidate id must not be empty".into(),
            });
        }
        Ok(())
    }
}

impl JobOffer {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.id.trim().is_empty() {
            return Err(MatchError::InvalidOffer {
                id: self.id.clone(),
                reason: "offer id must not be empty".into(),
            });
        }
        if self.company_id.trim().is_empty() {
            return Err(MatchError::InvalidOffer {
                id: self.id.clone(),
                reason: "offer company_id must not be empty".into(),
            });
        }
        Ok(())
    }
}
