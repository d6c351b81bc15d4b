use std::collections::HashMap;

use lazy_static::lazy_static;

use super::fold_text;

lazy_static! {
    /// Alias frecuentes → nombre canónico del municipio
    static ref CITY_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("bcn", "barcelona"); m.insert("barna", "barcelona");
        m.insert("madrid capital", "madrid");
        m.insert("vlc", "valencia"); m.insert("valencia capital", "valencia");
        m.insert("zgz", "zaragoza");
        m.insert("donostia", "san sebastian");
        m.insert("donostia san sebastian", "san sebastian");
        m.insert("gasteiz", "vitoria"); m.insert("vitoria gasteiz", "vitoria");
        m.insert("a coruna", "coruna"); m.insert("la coruna", "coruna");
        m.insert("palma de mallorca", "palma");
        m
    };

    /// Municipio → área metropolitana de referencia (zona de desplazamiento)
    static ref COMMUTING_AREA: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Madrid
        m.insert("madrid", "madrid");
        m.insert("getafe", "madrid"); m.insert("leganes", "madrid");
        m.insert("alcobendas", "madrid"); m.insert("mostoles", "madrid");
        m.insert("alcorcon", "madrid"); m.insert("fuenlabrada", "madrid");
        m.insert("alcala de henares", "madrid"); m.insert("pozuelo de alarcon", "madrid");
        m.insert("tres cantos", "madrid");
        // Barcelona
        m.insert("barcelona", "barcelona");
        m.insert("hospitalet de llobregat", "barcelona"); m.insert("badalona", "barcelona");
        m.insert("sabadell", "barcelona"); m.insert("terrassa", "barcelona");
        m.insert("cornella de llobregat", "barcelona");
        m.insert("sant cugat del valles", "barcelona");
        // Valencia
        m.insert("valencia", "valencia");
        m.insert("torrent", "valencia"); m.insert("paterna", "valencia");
        // Sevilla
        m.insert("sevilla", "sevilla"); m.insert("dos hermanas", "sevilla");
        // Bilbao
        m.insert("bilbao", "bilbao");
        m.insert("barakaldo", "bilbao"); m.insert("getxo", "bilbao");
        m
    };
}

/// Normalización de municipio. Vacío → None; lo no reconocido se devuelve
/// plegado tal cual para que la comparación exacta siga siendo posible.
pub fn normalize_city(input: &str) -> Option<String> {
    let folded = fold_text(input);
    if folded.is_empty() {
        return None;
    }

    if let Some(canonical) = CITY_ALIASES.get(folded.as_str()) {
        return Some((*canonical).to_string());
    }

    // artículos iniciales: "L'Hospitalet ..." / "El Prat ..." / "La Coruña"
    let stripped = folded.strip_prefix("l'").unwrap_or(&folded);
    let stripped = stripped
        .strip_prefix("el ")
        .or_else(|| stripped.strip_prefix("la "))
        .unwrap_or(stripped);

    if let Some(canonical) = CITY_ALIASES.get(stripped) {
        return Some((*canonical).to_string());
    }

    Some(stripped.to_string())
}

/// Dos municipios normalizados comparten zona de desplazamiento.
pub fn same_commuting_area(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (COMMUTING_AREA.get(a), COMMUTING_AREA.get(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_return_none() {
        assert_eq!(normalize_city(""), None);
        assert_eq!(normalize_city("   "), None);
    }

    #[test]
    fn folds_and_resolves_aliases() {
        assert_eq!(normalize_city("MADRID"), Some("madrid".into()));
        assert_eq!(normalize_city("BCN"), Some("barcelona".into()));
        assert_eq!(normalize_city("La Coruña"), Some("coruna".into()));
        assert_eq!(normalize_city("Móstoles"), Some("mostoles".into()));
    }

    #[test]
    fn strips_leading_articles() {
        assert_eq!(
            normalize_city("L'Hospitalet de Llobregat"),
            Some("hospitalet de llobregat".into())
        );
    }

    #[test]
    fn commuting_area_links_satellite_towns() {
        assert!(same_commuting_area("getafe", "madrid"));
        assert!(same_commuting_area("badalona", "hospitalet de llobregat"));
        assert!(!same_commuting_area("madrid", "barcelona"));
    }

    #[test]
    fn unknown_cities_only_match_exactly() {
        assert!(same_commuting_area("cuenca", "cuenca"));
        assert!(!same_commuting_area("cuenca", "teruel"));
    }
}
