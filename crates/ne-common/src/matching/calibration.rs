use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use tracing::info;

use super::scoring::DimensionScores;
use super::weights::MatchWeights;

/// Desenlace registrado de un emparejamiento histórico (contratación
/// frente a descarte/abandono).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Success,
    Failure,
}

/// Registro histórico: subpuntuaciones del par tal y como se calcularon en
/// su momento, más el desenlace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub scores: DimensionScores,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    /// intensidad con la que la separación observada corrige el prior
    pub learning_rate: f64,
    /// nº mínimo de registros (con al menos uno por clase) para recalibrar
    pub min_records: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            min_records: 10,
        }
    }
}

/// Produce un nuevo vector de pesos que separa mejor los emparejamientos con
/// éxito de los fallidos: cada dimensión se refuerza en proporción a la
/// diferencia de medias entre ambas clases, se mezcla con el prior mediante
/// la tasa de aprendizaje y se renormaliza a suma 1 con la versión
/// incrementada. Con datos insuficientes devuelve el prior intacto (sin
/// subir la versión): el agregador funciona igual sin calibración. No cambia
/// la forma de las subpuntuaciones ni la fórmula del agregador.
pub fn calibrate_weights(
    records: &[OutcomeRecord],
    prior: &MatchWeights,
    config: &CalibrationConfig,
) -> MatchWeights {
    let successes: Vec<&DimensionScores> = records
        .iter()
        .filter(|r| r.outcome == MatchOutcome::Success)
        .map(|r| &r.scores)
        .collect();
    let failures: Vec<&DimensionScores> = records
        .iter()
        .filter(|r| r.outcome == MatchOutcome::Failure)
        .map(|r| &r.scores)
        .collect();

    if records.len() < config.min_records || successes.is_empty() || failures.is_empty() {
        info!(
            records = records.len(),
            successes = successes.len(),
            failures = failures.len(),
            "not enough labeled outcomes; keeping prior weights"
        );
        return *prior;
    }

    let mean_success = mean_scores(&successes);
    let mean_failure = mean_scores(&failures);

    // separación por dimensión, acotada a >= 0: una dimensión que puntúa
    // mejor en los fallos no debe ganar peso
    let separation: [f64; 5] = std::array::from_fn(|d| (mean_success[d] - mean_failure[d]).max(0.0));

    if separation.iter().all(|s| *s == 0.0) {
        info!("no dimension separates outcomes; keeping prior weights");
        return *prior;
    }

    let prior_values = [
        prior.neurodivergence,
        prior.skills,
        prior.location,
        prior.accommodations,
        prior.experience,
    ];
    let raw: [f64; 5] =
        std::array::from_fn(|d| prior_values[d] * (1.0 + config.learning_rate * separation[d]));
    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return *prior;
    }

    let calibrated = MatchWeights {
        neurodivergence: raw[0] / sum,
        skills: raw[1] / sum,
        location: raw[2] / sum,
        accommodations: raw[3] / sum,
        experience: raw[4] / sum,
        version: prior.version + 1,
    };

    info!(
        version = calibrated.version,
        records = records.len(),
        "weights recalibrated from labeled outcomes"
    );
    calibrated
}

fn mean_scores(scores: &[&DimensionScores]) -> [f64; 5] {
    let n = scores.len() as f64;
    let mut sums = [0.0; 5];
    for s in scores {
        sums[0] += s.neurodivergence;
        sums[1] += s.skills;
        sums[2] += s.location;
        sums[3] += s.accommodations;
        sums[4] += s.experience;
    }
    sums.map(|v| v / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::weights::DEFAULT_WEIGHTS;

    fn record(skills: f64, outcome: MatchOutcome) -> OutcomeRecord {
        OutcomeRecord {
            scores: DimensionScores {
                neurodivergence: 0.5,
                skills,
                location: 0.5,
                accommodations: 0.5,
                experience: 0.5,
            },
            outcome,
        }
    }

    fn separating_records() -> Vec<OutcomeRecord> {
        let mut records = Vec::new();
        for _ in 0..6 {
            records.push(record(0.9, MatchOutcome::Success));
        }
        for _ in 0..6 {
            records.push(record(0.2, MatchOutcome::Failure));
        }
        records
    }

    #[test]
    fn separating_dimension_gains_weight() {
        let calibrated = calibrate_weights(
            &separating_records(),
            &DEFAULT_WEIGHTS,
            &CalibrationConfig::default(),
        );

        assert!(calibrated.skills > DEFAULT_WEIGHTS.skills);
        assert!(calibrated.location < DEFAULT_WEIGHTS.location);
        assert!((calibrated.sum() - 1.0).abs() < 1e-9);
        assert_eq!(calibrated.version, DEFAULT_WEIGHTS.version + 1);
        assert!(calibrated.validate().is_ok());
    }

    #[test]
    fn insufficient_records_keep_prior() {
        let records = vec![
            record(0.9, MatchOutcome::Success),
            record(0.2, MatchOutcome::Failure),
        ];
        let calibrated =
            calibrate_weights(&records, &DEFAULT_WEIGHTS, &CalibrationConfig::default());
        assert_eq!(calibrated, DEFAULT_WEIGHTS);
    }

    #[test]
    fn single_class_keeps_prior() {
        let records: Vec<_> = (0..12).map(|_| record(0.9, MatchOutcome::Success)).collect();
        let calibrated =
            calibrate_weights(&records, &DEFAULT_WEIGHTS, &CalibrationConfig::default());
        assert_eq!(calibrated, DEFAULT_WEIGHTS);
    }

    #[test]
    fn no_separation_keeps_prior() {
        let mut records: Vec<_> = (0..6).map(|_| record(0.5, MatchOutcome::Success)).collect();
        records.extend((0..6).map(|_| record(0.5, MatchOutcome::Failure)));

        let calibrated =
            calibrate_weights(&records, &DEFAULT_WEIGHTS, &CalibrationConfig::default());
        assert_eq!(calibrated, DEFAULT_WEIGHTS);
    }

    #[test]
    fn calibration_is_deterministic() {
        let records = separating_records();
        let a = calibrate_weights(&records, &DEFAULT_WEIGHTS, &CalibrationConfig::default());
        let b = calibrate_weights(&records, &DEFAULT_WEIGHTS, &CalibrationConfig::default());
        assert_eq!(a, b);
    }
}
