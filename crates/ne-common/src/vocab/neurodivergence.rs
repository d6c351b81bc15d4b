use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::fold_text;

/// Vocabulario cerrado de neurodivergencias de la plataforma.
/// `SinEspecificar` es el cubo explícito para valores ausentes o no
/// reconocidos; la corrección nunca falla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum Neurodivergence {
    Tdah,
    Tea,
    Dislexia,
    Discalculia,
    Tourette,
    Otra,
    SinEspecificar,
}

impl Neurodivergence {
    /// Nombre legible para los motivos mostrados al usuario.
    pub fn label(&self) -> &'static str {
        match self {
            Neurodivergence::Tdah => "TDAH",
            Neurodivergence::Tea => "TEA",
            Neurodivergence::Dislexia => "dislexia",
            Neurodivergence::Discalculia => "discalculia",
            Neurodivergence::Tourette => "síndrome de Tourette",
            Neurodivergence::Otra => "otra neurodivergencia",
            Neurodivergence::SinEspecificar => "sin especificar",
        }
    }
}

/// Corrección del texto libre del formulario al vocabulario cerrado.
pub fn correct_neurodivergence(input: Option<&str>) -> Neurodivergence {
    let Some(raw) = input else {
        return Neurodivergence::SinEspecificar;
    };

    let folded = fold_text(raw);
    if folded.is_empty() {
        return Neurodivergence::SinEspecificar;
    }

    // tokens cortos (tea, asd) se comparan por palabra exacta para no
    // confundirlos con fragmentos de otras palabras
    let words: HashSet<&str> = folded.split_whitespace().collect();

    if words.contains("tdah")
        || words.contains("adhd")
        || folded.contains("deficit de atencion")
        || folded.contains("hiperactividad")
    {
        return Neurodivergence::Tdah;
    }
    if words.contains("tea")
        || words.contains("asd")
        || folded.contains("autis")
        || folded.contains("asperger")
        || folded.contains("espectro autista")
    {
        return Neurodivergence::Tea;
    }
    if folded.contains("dislexia") || folded.contains("dyslexia") {
        return Neurodivergence::Dislexia;
    }
    if folded.contains("discalculia") || folded.contains("dyscalculia") {
        return Neurodivergence::Discalculia;
    }
    if folded.contains("tourette") {
        return Neurodivergence::Tourette;
    }
    if words.contains("otra") || words.contains("otro") || words.contains("other") {
        return Neurodivergence::Otra;
    }

    Neurodivergence::SinEspecificar
}

/// Neurodivergencias a las que va dirigida una oferta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetSet {
    pub open_to_all: bool,
    pub types: HashSet<Neurodivergence>,
}

impl TargetSet {
    pub fn parse(raw: &[String]) -> Self {
        let mut set = TargetSet::default();

        for entry in raw {
            let folded = fold_text(entry);
            if folded.is_empty() {
                continue;
            }
            if matches!(folded.as_str(), "todas" | "todos" | "all" | "*" | "cualquiera")
                || folded.contains("todas las neurodivergencias")
            {
                set.open_to_all = true;
                continue;
            }
            match correct_neurodivergence(Some(entry)) {
                // entradas no reconocidas se ignoran: no deben capturar a
                // los candidatos sin tipo declarado
                Neurodivergence::SinEspecificar => {}
                nd => {
                    set.types.insert(nd);
                }
            }
        }

        set
    }

    /// Una lista vacía se interpreta de la forma más permisiva: oferta
    /// abierta a cualquier perfil.
    pub fn is_unrestricted(&self) -> bool {
        self.open_to_all || self.types.is_empty()
    }

    pub fn targets(&self, nd: Neurodivergence) -> bool {
        self.is_unrestricted() || self.types.contains(&nd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_common_aliases() {
        assert_eq!(
            correct_neurodivergence(Some("TDAH")),
            Neurodivergence::Tdah
        );
        assert_eq!(
            correct_neurodivergence(Some("déficit de atención e hiperactividad")),
            Neurodivergence::Tdah
        );
        assert_eq!(
            correct_neurodivergence(Some("Trastorno del Espectro Autista")),
            Neurodivergence::Tea
        );
        assert_eq!(
            correct_neurodivergence(Some("dislexia")),
            Neurodivergence::Dislexia
        );
    }

    #[test]
    fn missing_or_unknown_goes_to_unspecified() {
        assert_eq!(
            correct_neurodivergence(None),
            Neurodivergence::SinEspecificar
        );
        assert_eq!(
            correct_neurodivergence(Some("")),
            Neurodivergence::SinEspecificar
        );
        assert_eq!(
            correct_neurodivergence(Some("prefiero no decirlo")),
            Neurodivergence::SinEspecificar
        );
    }

    #[test]
    fn short_tokens_require_exact_words() {
        // "teatro" no debe reconocerse como TEA
        assert_eq!(
            correct_neurodivergence(Some("monitor de teatro")),
            Neurodivergence::SinEspecificar
        );
    }

    #[test]
    fn wildcard_opens_target_set() {
        let set = TargetSet::parse(&["todas".into()]);
        assert!(set.open_to_all);
        assert!(set.targets(Neurodivergence::Dislexia));
    }

    #[test]
    fn empty_target_list_is_unrestricted() {
        let set = TargetSet::parse(&[]);
        assert!(set.is_unrestricted());
        assert!(set.targets(Neurodivergence::Tea));
    }

    #[test]
    fn explicit_targets_exclude_others() {
        let set = TargetSet::parse(&["TDAH".into(), "dislexia".into()]);
        assert!(set.targets(Neurodivergence::Tdah));
        assert!(!set.targets(Neurodivergence::Tea));
    }

    #[test]
    fn unrecognized_entries_are_ignored() {
        let set = TargetSet::parse(&["perfil polivalente".into(), "TEA".into()]);
        assert_eq!(set.types.len(), 1);
        assert!(set.targets(Neurodivergence::Tea));
    }
}
