use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Pesos por defecto del agregador. Ajustables por configuración o por el
/// calibrador; el motor funciona con este vector fijo si no hay datos de
/// calibración.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    neurodivergence: 0.30,
    skills: 0.25,
    location: 0.15,
    accommodations: 0.20,
    experience: 0.10,
    version: 1,
};

/// Vector de pesos por dimensión. La versión identifica el vector con el que
/// se puntuó cada resultado, de forma que los históricos son reproducibles
/// frente al vector activo en su momento.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub neurodivergence: f64,
    pub skills: f64,
    pub location: f64,
    pub accommodations: f64,
    pub experience: f64,
    pub version: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.neurodivergence + self.skills + self.location + self.accommodations + self.experience
    }

    /// Validación en el momento de carga/activación, nunca al puntuar:
    /// pesos negativos, no finitos o de suma cero se rechazan aquí.
    pub fn validate(&self) -> Result<(), MatchError> {
        let entries = [
            ("neurodivergence", self.neurodivergence),
            ("skills", self.skills),
            ("location", self.location),
            ("accommodations", self.accommodations),
            ("experience", self.experience),
        ];

        for (name, value) in entries {
            if !value.is_finite() {
                return Err(MatchError::InvalidWeights(format!("{name} is not finite")));
            }
            if value < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{name} is negative: {value}"
                )));
            }
        }
        if self.sum() <= 0.0 {
            return Err(MatchError::InvalidWeights("weights sum to zero".into()));
        }
        Ok(())
    }

    /// Carga el vector con overrides opcionales `NE_WEIGHT_*` sobre los
    /// valores por defecto; valida antes de devolver.
    pub fn from_env() -> Result<Self, MatchError> {
        fn env_weight(key: &str, default: f64) -> f64 {
            std::env::var(key)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        }

        let weights = MatchWeights {
            neurodivergence: env_weight(
                "NE_WEIGHT_NEURODIVERGENCE",
                DEFAULT_WEIGHTS.neurodivergence,
            ),
            skills: env_weight("NE_WEIGHT_SKILLS", DEFAULT_WEIGHTS.skills),
            location: env_weight("NE_WEIGHT_LOCATION", DEFAULT_WEIGHTS.location),
            accommodations: env_weight("NE_WEIGHT_ACCOMMODATIONS", DEFAULT_WEIGHTS.accommodations),
            experience: env_weight("NE_WEIGHT_EXPERIENCE", DEFAULT_WEIGHTS.experience),
            version: DEFAULT_WEIGHTS.version,
        };
        weights.validate()?;
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn negative_weights_are_rejected() {
        let weights = MatchWeights {
            skills: -0.1,
            ..DEFAULT_WEIGHTS
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        let weights = MatchWeights {
            location: f64::NAN,
            ..DEFAULT_WEIGHTS
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn zero_sum_is_rejected() {
        let weights = MatchWeights {
            neurodivergence: 0.0,
            skills: 0.0,
            location: 0.0,
            accommodations: 0.0,
            experience: 0.0,
            version: 1,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn unnormalized_weights_are_still_valid() {
        // la renormalización es responsabilidad del agregador
        let weights = MatchWeights {
            neurodivergence: 2.0,
            skills: 1.0,
            location: 1.0,
            accommodations: 1.0,
            experience: 1.0,
            version: 7,
        };
        assert!(weights.validate().is_ok());
    }
}
