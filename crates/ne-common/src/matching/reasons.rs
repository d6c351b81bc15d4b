use super::encoder::{CandidateFeatures, OfferFeatures};
use super::scoring::{DimensionScores, QualityLabel};
use crate::vocab::WorkMode;

/// Genera la lista ordenada de motivos legibles de un resultado. Lee las
/// puntuaciones ya calculadas y los campos codificados del par; nunca
/// recalcula una dimensión, de forma que no puede contradecir al agregador.
pub fn generate_reasons(
    scores: &DimensionScores,
    total: f64,
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
) -> Vec<String> {
    let mut reasons = Vec::new();

    match QualityLabel::from_total(total) {
        QualityLabel::Excelente => {
            reasons.push("Coincidencia excelente entre el perfil y la oferta".to_string())
        }
        QualityLabel::MuyBueno => {
            reasons.push("Coincidencia muy buena entre el perfil y la oferta".to_string())
        }
        QualityLabel::Bueno => {
            reasons.push("Buena coincidencia entre el perfil y la oferta".to_string())
        }
        // por debajo del tramo "bueno" no hay titular
        QualityLabel::Bajo => {}
    }

    if offer.targets.types.contains(&candidate.neurotype) {
        reasons.push(format!(
            "La oferta busca específicamente perfiles con {}",
            candidate.neurotype.label()
        ));
    } else if offer.targets.open_to_all {
        reasons.push("La oferta está abierta a todas las neurodivergencias".to_string());
    }

    if let Some(required) = &offer.requirement_keywords {
        if !required.is_empty() {
            let mut matched: Vec<&str> = required
                .intersection(&candidate.skills)
                .map(String::as_str)
                .collect();
            if !matched.is_empty() {
                matched.sort_unstable();
                reasons.push(format!(
                    "Aptitudes alineadas con los requisitos ({}/{}): {}",
                    matched.len(),
                    required.len(),
                    matched.join(", ")
                ));
            }
        }
    }

    if offer.work_mode == WorkMode::Remoto {
        if candidate.preferences.remote {
            reasons.push("Trabajo en remoto, como prefieres".to_string());
        } else {
            reasons.push("Trabajo 100% en remoto: la ubicación no es una barrera".to_string());
        }
    } else if scores.location >= 0.8 {
        if let (Some(city), Some(_)) = (&candidate.city, &offer.city) {
            reasons.push(format!("Zona de trabajo compatible ({city})"));
        }
    }

    let needed = candidate.accommodations_needed.len();
    if needed > 0 {
        let covered = candidate
            .accommodations_needed
            .intersection(&offer.accommodations_available)
            .count();
        if covered == needed {
            reasons.push(format!(
                "Todas las adaptaciones solicitadas están disponibles ({covered}/{needed})"
            ));
        } else if covered > 0 {
            reasons.push(format!("Adaptaciones cubiertas: {covered}/{needed}"));
        }
    }

    // preferencia de entorno tranquilo satisfecha sin haberse pedido como
    // adaptación (si se pidió, ya cuenta en la línea de cobertura)
    if candidate.preferences.quiet_environment
        && !candidate.accommodations_needed.contains("quiet_environment")
        && offer.accommodations_available.contains("quiet_environment")
    {
        reasons.push("Entorno de trabajo tranquilo disponible, en línea con tu preferencia".to_string());
    }

    if let Some(required) = offer.required_level {
        if scores.experience >= 1.0 {
            reasons.push(format!(
                "Nivel de experiencia ajustado al requerido ({})",
                required.label()
            ));
        } else if scores.experience >= 0.8 {
            reasons.push("Experiencia por encima de la requerida".to_string());
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::encoder::{encode_candidate, encode_offer};
    use crate::matching::scoring::CompatibilityEngine;
    use crate::matching::weights::DEFAULT_WEIGHTS;
    use crate::{CandidateProfile, JobOffer};

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: "cand-1".into(),
            neurodivergence_type: Some("TEA".into()),
            city: Some("Madrid".into()),
            work_preferences: vec!["remoto".into()],
            accommodations_needed: vec![
                "entorno tranquilo".into(),
                "instrucciones por escrito".into(),
            ],
            ..CandidateProfile::default()
        }
    }

    fn offer() -> JobOffer {
        JobOffer {
            id: "of-1".into(),
            company_id: "emp-1".into(),
            work_mode: Some("remoto".into()),
            target_neurodivergences: vec!["TEA".into()],
            accommodations_available: vec!["entorno tranquilo".into()],
            ..JobOffer::default()
        }
    }

    fn reasons_for(candidate: &CandidateProfile, offer: &JobOffer) -> (Vec<String>, f64) {
        let engine = CompatibilityEngine::new(DEFAULT_WEIGHTS).unwrap();
        let c = encode_candidate(candidate);
        let o = encode_offer(offer);
        let scores = engine.score_features(&c, &o);
        let total = scores.weighted_total(&DEFAULT_WEIGHTS);
        (generate_reasons(&scores, total, &c, &o), total)
    }

    #[test]
    fn headline_follows_quality_bands() {
        let mut covering_offer = offer();
        covering_offer
            .accommodations_available
            .push("instrucciones escritas".into());

        let (reasons, total) = reasons_for(&candidate(), &covering_offer);
        assert!(total >= 90.0);
        assert_eq!(
            reasons[0],
            "Coincidencia excelente entre el perfil y la oferta"
        );
    }

    #[test]
    fn low_totals_have_no_headline() {
        let mut weak_offer = offer();
        weak_offer.work_mode = Some("presencial".into());
        weak_offer.location = Some("Barcelona".into());
        weak_offer.target_neurodivergences = vec!["TDAH".into()];
        weak_offer.accommodations_available.clear();

        let (reasons, total) = reasons_for(&candidate(), &weak_offer);
        assert!(total < 70.0);
        assert!(reasons
            .iter()
            .all(|r| !r.contains("oincidencia")));
    }

    #[test]
    fn explicit_targeting_line_names_the_type() {
        let (reasons, _) = reasons_for(&candidate(), &offer());
        assert!(reasons
            .iter()
            .any(|r| r == "La oferta busca específicamente perfiles con TEA"));
    }

    #[test]
    fn wildcard_offer_gets_open_line() {
        let mut open_offer = offer();
        open_offer.target_neurodivergences = vec!["todas".into()];

        let (reasons, _) = reasons_for(&candidate(), &open_offer);
        assert!(reasons
            .iter()
            .any(|r| r == "La oferta está abierta a todas las neurodivergencias"));
    }

    #[test]
    fn accommodation_lines_carry_counts() {
        let (reasons, _) = reasons_for(&candidate(), &offer());
        assert!(reasons.iter().any(|r| r == "Adaptaciones cubiertas: 1/2"));

        let mut covering_offer = offer();
        covering_offer
            .accommodations_available
            .push("instrucciones escritas".into());
        let (reasons, _) = reasons_for(&candidate(), &covering_offer);
        assert!(reasons
            .iter()
            .any(|r| r == "Todas las adaptaciones solicitadas están disponibles (2/2)"));
    }

    #[test]
    fn remote_preference_is_acknowledged() {
        let (reasons, _) = reasons_for(&candidate(), &offer());
        assert!(reasons.iter().any(|r| r == "Trabajo en remoto, como prefieres"));

        let mut no_pref = candidate();
        no_pref.work_preferences.clear();
        let (reasons, _) = reasons_for(&no_pref, &offer());
        assert!(reasons
            .iter()
            .any(|r| r == "Trabajo 100% en remoto: la ubicación no es una barrera"));
    }

    #[test]
    fn matched_skill_lines_are_sorted_and_counted() {
        let mut candidate = candidate();
        candidate.skills_text = Some("organización, Excel y empatía".into());
        let mut offer = offer();
        offer.requirements_text = Some("se requiere Excel y organización".into());

        let (reasons, _) = reasons_for(&candidate, &offer);
        assert!(reasons
            .iter()
            .any(|r| r == "Aptitudes alineadas con los requisitos (2/2): excel, organizacion"));
    }

    #[test]
    fn quiet_preference_line_avoids_double_counting() {
        let mut prefers_quiet = candidate();
        prefers_quiet.work_preferences.push("entorno tranquilo".into());
        prefers_quiet.accommodations_needed.clear();

        let (reasons, _) = reasons_for(&prefers_quiet, &offer());
        assert!(reasons
            .iter()
            .any(|r| r == "Entorno de trabajo tranquilo disponible, en línea con tu preferencia"));

        // si ya se pidió como adaptación, sólo aparece la línea de cobertura
        let (reasons, _) = reasons_for(&candidate(), &offer());
        assert!(reasons.iter().all(|r| !r.contains("en línea con tu preferencia")));
    }

    #[test]
    fn generation_is_deterministic() {
        let (a, _) = reasons_for(&candidate(), &offer());
        let (b, _) = reasons_for(&candidate(), &offer());
        assert_eq!(a, b);
    }
}
