use std::collections::HashSet;

use crate::skill_keywords::extract_skill_keywords;
use crate::vocab::{
    correct_experience_level, correct_neurodivergence, correct_work_mode, fold_text,
    infer_experience_level, normalize_accommodation_set, normalize_city, ExperienceLevel,
    Neurodivergence, TargetSet, WorkMode,
};
use crate::{CandidateProfile, JobOffer};

/// Preferencias de trabajo del candidato (flags del formulario).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkPreferences {
    pub remote: bool,
    pub flexible_hours: bool,
    pub quiet_environment: bool,
}

impl WorkPreferences {
    fn parse(raw: &[String]) -> Self {
        let mut prefs = WorkPreferences::default();
        for entry in raw {
            let folded = fold_text(entry);
            if folded.contains("remoto")
                || folded.contains("remote")
                || folded.contains("teletrabajo")
            {
                prefs.remote = true;
            }
            if folded.contains("flexib") {
                prefs.flexible_hours = true;
            }
            if folded.contains("tranquil")
                || folded.contains("silencio")
                || folded.contains("quiet")
            {
                prefs.quiet_environment = true;
            }
        }
        prefs
    }
}

/// Representación normalizada de un candidato, lista para puntuar.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFeatures {
    pub id: String,
    pub neurotype: Neurodivergence,
    pub skills: HashSet<String>,
    pub level: ExperienceLevel,
    pub city: Option<String>,
    pub preferences: WorkPreferences,
    pub accommodations_needed: HashSet<String>,
    /// nº de adaptaciones solicitadas reconocidas en el vocabulario canónico
    pub recognized_needs: usize,
}

/// Representación normalizada de una oferta.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferFeatures {
    pub id: String,
    pub targets: TargetSet,
    /// None si la oferta no trae texto de requisitos (campo ausente);
    /// Some(∅) si trae texto pero sin palabras clave extraíbles
    pub requirement_keywords: Option<HashSet<String>>,
    pub work_mode: WorkMode,
    pub city: Option<String>,
    pub accommodations_available: HashSet<String>,
    pub required_level: Option<ExperienceLevel>,
}

/// Codificación determinista y sin efectos: el mismo perfil produce siempre
/// las mismas features. Los campos ausentes o irreconocibles degradan a los
/// cubos neutros del vocabulario, nunca a error.
pub fn encode_candidate(profile: &CandidateProfile) -> CandidateFeatures {
    let (accommodations_needed, recognized_needs) =
        normalize_accommodation_set(&profile.accommodations_needed);

    CandidateFeatures {
        id: profile.id.clone(),
        neurotype: correct_neurodivergence(profile.neurodivergence_type.as_deref()),
        skills: profile
            .skills_text
            .as_deref()
            .map(extract_skill_keywords)
            .unwrap_or_default(),
        level: infer_experience_level(profile.experience_text.as_deref()),
        city: profile.city.as_deref().and_then(normalize_city),
        preferences: WorkPreferences::parse(&profile.work_preferences),
        accommodations_needed,
        recognized_needs,
    }
}

pub fn encode_offer(offer: &JobOffer) -> OfferFeatures {
    let requirement_keywords = offer
        .requirements_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(extract_skill_keywords);

    OfferFeatures {
        id: offer.id.clone(),
        targets: TargetSet::parse(&offer.target_neurodivergences),
        requirement_keywords,
        work_mode: correct_work_mode(offer.work_mode.as_deref()),
        city: offer.location.as_deref().and_then(normalize_city),
        accommodations_available: normalize_accommodation_set(&offer.accommodations_available).0,
        required_level: offer
            .required_experience_level
            .as_deref()
            .and_then(correct_experience_level),
    }
}
