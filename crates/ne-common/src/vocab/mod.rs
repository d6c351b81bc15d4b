pub mod accommodations;
pub mod city;
pub mod experience;
pub mod neurodivergence;
pub mod work_mode;

pub use accommodations::{canonical_tag, normalize_accommodation, normalize_accommodation_set};
pub use city::{normalize_city, same_commuting_area};
pub use experience::{correct_experience_level, infer_experience_level, ExperienceLevel};
pub use neurodivergence::{correct_neurodivergence, Neurodivergence, TargetSet};
pub use work_mode::{correct_work_mode, WorkMode};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Plegado común para todo el vocabulario: NFKC, minúsculas, sin marcas
/// diacríticas ("sénior" → "senior", "años" → "anos"), trim.
pub fn fold_text(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_accents_and_width() {
        assert_eq!(fold_text("  Sénior  "), "senior");
        assert_eq!(fold_text("TDAH"), "tdah");
        assert_eq!(fold_text("Móstoles"), "mostoles");
        assert_eq!(fold_text("５ años"), "5 anos");
    }

    #[test]
    fn empty_input_folds_to_empty() {
        assert_eq!(fold_text("   "), "");
    }
}
