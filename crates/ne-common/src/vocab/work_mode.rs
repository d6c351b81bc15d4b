use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::fold_text;

/// Modalidad de trabajo de la oferta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remoto,
    Hibrido,
    Presencial,
    SinEspecificar,
}

/// Corrección del texto libre a la modalidad canónica.
/// Los híbridos suelen mencionar también "remoto" ("híbrido, 2 días en
/// remoto"), por eso se evalúan primero.
pub fn correct_work_mode(input: Option<&str>) -> WorkMode {
    let Some(raw) = input else {
        return WorkMode::SinEspecificar;
    };

    let folded = fold_text(raw);
    if folded.is_empty() {
        return WorkMode::SinEspecificar;
    }

    if folded.contains("hibrid")
        || folded.contains("hybrid")
        || folded.contains("semipresencial")
        || folded.contains("mixto")
    {
        return WorkMode::Hibrido;
    }
    if folded.contains("remoto")
        || folded.contains("remote")
        || folded.contains("teletrabajo")
        || folded.contains("a distancia")
        || folded.contains("desde casa")
    {
        return WorkMode::Remoto;
    }
    if folded.contains("presencial")
        || folded.contains("oficina")
        || folded.contains("onsite")
        || folded.contains("on-site")
        || folded.contains("in situ")
    {
        return WorkMode::Presencial;
    }

    WorkMode::SinEspecificar
}
