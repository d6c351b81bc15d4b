use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::fold_text;

/// Nivel de experiencia (vocabulario cerrado junior/intermedio/senior).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub(crate) fn index(self) -> usize {
        match self {
            ExperienceLevel::Junior => 0,
            ExperienceLevel::Mid => 1,
            ExperienceLevel::Senior => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "intermedio",
            ExperienceLevel::Senior => "senior",
        }
    }
}

// los patrones operan sobre texto plegado (sin tildes): "años" → "anos"
static JUNIOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"sin experiencia|primer empleo|recien titulad|en practicas|practicas profesionales|becari|junior|aprendiz",
    )
    .unwrap()
});

static SENIOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"senior|amplia experiencia|experto|especialista|liderando|lider de equipo|jefe de")
        .unwrap()
});

// "5 años", "5+ años", "1 año", "mas de 10 anos"
static YEARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})\s*\+?\s*anos?").unwrap());

/// Corrección del nivel requerido declarado explícitamente en una oferta.
pub fn correct_experience_level(input: &str) -> Option<ExperienceLevel> {
    let folded = fold_text(input);
    if folded.is_empty() {
        return None;
    }
    if folded.contains("junior") || folded.contains("trainee") || folded.contains("inicial") {
        return Some(ExperienceLevel::Junior);
    }
    if folded.contains("senior") {
        return Some(ExperienceLevel::Senior);
    }
    if folded.contains("mid") || folded.contains("intermedio") || folded.contains("medio") {
        return Some(ExperienceLevel::Mid);
    }
    None
}

/// Inferencia aproximada del nivel a partir del texto libre de experiencia.
/// Sin ninguna señal → `Mid`. Es una heurística de mejor esfuerzo, no un
/// dato autoritativo: el formulario no pide años de experiencia.
pub fn infer_experience_level(text: Option<&str>) -> ExperienceLevel {
    let Some(raw) = text else {
        return ExperienceLevel::Mid;
    };

    let folded = fold_text(raw);
    if folded.is_empty() {
        return ExperienceLevel::Mid;
    }

    let years = YEARS_RE
        .captures_iter(&folded)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max();

    if JUNIOR_RE.is_match(&folded) || matches!(years, Some(0..=1)) {
        return ExperienceLevel::Junior;
    }
    if SENIOR_RE.is_match(&folded) || matches!(years, Some(y) if y >= 5) {
        return ExperienceLevel::Senior;
    }

    ExperienceLevel::Mid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_signal_defaults_to_mid() {
        assert_eq!(infer_experience_level(None), ExperienceLevel::Mid);
        assert_eq!(infer_experience_level(Some("")), ExperienceLevel::Mid);
        assert_eq!(
            infer_experience_level(Some("he trabajado en varios sectores")),
            ExperienceLevel::Mid
        );
    }

    #[test]
    fn junior_phrases_win() {
        assert_eq!(
            infer_experience_level(Some("Sin experiencia previa, muchas ganas de aprender")),
            ExperienceLevel::Junior
        );
        assert_eq!(
            infer_experience_level(Some("busco mi primer empleo")),
            ExperienceLevel::Junior
        );
        assert_eq!(
            infer_experience_level(Some("1 año como becario")),
            ExperienceLevel::Junior
        );
    }

    #[test]
    fn senior_phrases_and_years_win() {
        assert_eq!(
            infer_experience_level(Some("perfil sénior con equipo a cargo")),
            ExperienceLevel::Senior
        );
        assert_eq!(
            infer_experience_level(Some("8 años de experiencia en logística")),
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn intermediate_years_stay_mid() {
        assert_eq!(
            infer_experience_level(Some("3 años de experiencia")),
            ExperienceLevel::Mid
        );
    }

    #[test]
    fn corrects_declared_levels() {
        assert_eq!(
            correct_experience_level("Junior"),
            Some(ExperienceLevel::Junior)
        );
        assert_eq!(
            correct_experience_level("Sénior"),
            Some(ExperienceLevel::Senior)
        );
        assert_eq!(
            correct_experience_level("nivel intermedio"),
            Some(ExperienceLevel::Mid)
        );
        assert_eq!(correct_experience_level("cualquiera"), None);
    }
}
