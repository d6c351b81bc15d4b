use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::fold_text;

/// Alias (texto del formulario) → etiqueta canónica de adaptación.
static ALIAS_TO_TAG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        (
            "quiet_environment",
            &[
                "entorno tranquilo",
                "ambiente tranquilo",
                "espacio tranquilo",
                "tranquilo",
                "silencioso",
                "espacio silencioso",
                "sin ruido",
                "poco ruido",
                "zona tranquila",
                "quiet environment",
            ],
        ),
        (
            "flexible_hours",
            &[
                "horario flexible",
                "horarios flexibles",
                "flexibilidad horaria",
                "jornada flexible",
                "flexible hours",
            ],
        ),
        (
            "remote_work",
            &[
                "teletrabajo",
                "trabajo remoto",
                "trabajo en remoto",
                "trabajo desde casa",
                "remote work",
            ],
        ),
        (
            "written_instructions",
            &[
                "instrucciones escritas",
                "instrucciones por escrito",
                "comunicacion escrita",
                "pautas por escrito",
                "written instructions",
            ],
        ),
        (
            "extra_breaks",
            &[
                "pausas adicionales",
                "descansos adicionales",
                "pausas frecuentes",
                "descansos frecuentes",
                "extra breaks",
            ],
        ),
        (
            "noise_cancelling_headphones",
            &[
                "auriculares",
                "cascos",
                "auriculares con cancelacion de ruido",
                "cancelacion de ruido",
                "noise cancelling headphones",
            ],
        ),
        (
            "job_coach",
            &[
                "preparador laboral",
                "acompanamiento laboral",
                "mentor de apoyo",
                "apoyo de mentor",
                "job coach",
            ],
        ),
        (
            "adapted_lighting",
            &[
                "iluminacion regulable",
                "iluminacion adaptada",
                "luz natural",
                "sin fluorescentes",
                "adapted lighting",
            ],
        ),
        (
            "structured_tasks",
            &[
                "tareas estructuradas",
                "plazos claros",
                "objetivos claros",
                "rutinas claras",
                "structured tasks",
            ],
        ),
        (
            "sensory_adjustments",
            &[
                "ajustes sensoriales",
                "adaptacion sensorial",
                "espacio sensorialmente seguro",
                "sensory adjustments",
            ],
        ),
    ];

    let mut map = HashMap::new();
    for (tag, alias_list) in aliases {
        map.insert(*tag, *tag);
        for alias in *alias_list {
            map.insert(*alias, *tag);
        }
    }
    map
});

/// Segundo intento de lookup con clave compacta (sin espacios ni guiones),
/// para tolerar variantes como "quiet-environment" o "horarioflexible".
static COMPACT_ALIAS_TO_TAG: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, tag) in ALIAS_TO_TAG.iter() {
        map.entry(compact_key(alias)).or_insert(*tag);
    }
    map
});

fn compact_key(input: &str) -> String {
    input.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Etiqueta canónica si el texto corresponde a una adaptación del
/// vocabulario; None si no se reconoce.
pub fn canonical_tag(input: &str) -> Option<&'static str> {
    let folded = fold_text(input);
    if folded.is_empty() {
        return None;
    }
    if let Some(tag) = ALIAS_TO_TAG.get(folded.as_str()) {
        return Some(*tag);
    }
    COMPACT_ALIAS_TO_TAG.get(&compact_key(&folded)).copied()
}

/// Normaliza a etiqueta canónica; lo no reconocido se conserva plegado tal
/// cual, de forma que la cobertura por coincidencia exacta sigue midiéndose.
pub fn normalize_accommodation(input: &str) -> Option<String> {
    if let Some(tag) = canonical_tag(input) {
        return Some(tag.to_string());
    }
    let folded = fold_text(input);
    if folded.is_empty() {
        None
    } else {
        Some(folded)
    }
}

/// Devuelve el conjunto normalizado y cuántas entradas se reconocieron en el
/// vocabulario canónico.
pub fn normalize_accommodation_set(raw: &[String]) -> (HashSet<String>, usize) {
    let mut set = HashSet::new();
    let mut recognized = 0;

    for entry in raw {
        if canonical_tag(entry).is_some() {
            recognized += 1;
        }
        if let Some(normalized) = normalize_accommodation(entry) {
            set.insert(normalized);
        }
    }

    (set, recognized)
}
