use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use strsim::damerau_levenshtein;

use crate::vocab::fold_text;

/// Diccionario fijo de aptitudes (técnicas y transversales) de la
/// plataforma: alias → forma canónica. Es deliberadamente una bolsa de
/// palabras clave, no un modelo semántico, para que la puntuación sea
/// determinista y explicable.
///
/// NOTE: los alias se escriben ya plegados (minúsculas, sin tildes).
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // Técnicas
        ("javascript", &["js", "javascript", "ecmascript"]),
        ("typescript", &["ts", "typescript"]),
        ("python", &["python", "python3"]),
        ("java", &["java"]),
        ("php", &["php"]),
        ("sql", &["sql", "mysql", "postgresql", "bases de datos"]),
        ("html", &["html", "html5"]),
        ("css", &["css", "css3", "hojas de estilo"]),
        ("react", &["react", "reactjs", "react js"]),
        ("angular", &["angular", "angularjs"]),
        ("wordpress", &["wordpress"]),
        ("git", &["git", "github", "gitlab", "control de versiones"]),
        ("linux", &["linux", "ubuntu"]),
        ("excel", &["excel", "hojas de calculo", "tablas dinamicas"]),
        (
            "ofimatica",
            &["ofimatica", "paquete office", "microsoft office", "word", "powerpoint"],
        ),
        ("mecanografia", &["mecanografia", "escritura al teclado"]),
        (
            "entrada de datos",
            &["entrada de datos", "introduccion de datos", "grabacion de datos", "data entry"],
        ),
        (
            "testing",
            &["testing", "qa", "control de calidad", "pruebas de software"],
        ),
        ("diseno grafico", &["diseno grafico", "photoshop", "illustrator"]),
        (
            "atencion al cliente",
            &[
                "atencion al cliente",
                "soporte al cliente",
                "servicio al cliente",
                "trato con clientes",
            ],
        ),
        (
            "administracion",
            &[
                "administracion",
                "tareas administrativas",
                "gestion administrativa",
                "auxiliar administrativo",
            ],
        ),
        ("contabilidad", &["contabilidad", "facturacion"]),
        (
            "logistica",
            &["logistica", "almacen", "gestion de almacen", "inventario", "reposicion"],
        ),
        (
            "marketing",
            &["marketing", "marketing digital", "redes sociales", "community manager"],
        ),
        (
            "redaccion",
            &["redaccion", "redaccion de contenidos", "copywriting"],
        ),
        ("ingles", &["ingles", "english", "nivel de ingles"]),
        (
            "analisis de datos",
            &["analisis de datos", "power bi", "tableau", "estadistica"],
        ),
        // Transversales
        (
            "atencion al detalle",
            &[
                "atencion al detalle",
                "detallista",
                "minucioso",
                "minuciosa",
                "minuciosidad",
                "precision",
            ],
        ),
        (
            "organizacion",
            &[
                "organizacion",
                "organizado",
                "organizada",
                "planificacion",
                "metodico",
                "metodica",
            ],
        ),
        (
            "trabajo en equipo",
            &["trabajo en equipo", "colaboracion", "colaborativo"],
        ),
        ("comunicacion", &["comunicacion", "habilidades comunicativas"]),
        (
            "creatividad",
            &["creatividad", "creativo", "creativa", "pensamiento creativo"],
        ),
        (
            "concentracion",
            &["concentracion", "hiperfoco", "foco sostenido"],
        ),
        ("memoria", &["memoria", "memoria visual", "memorizacion"]),
        (
            "resolucion de problemas",
            &["resolucion de problemas", "solucion de problemas", "resolutivo"],
        ),
        (
            "pensamiento logico",
            &["pensamiento logico", "razonamiento logico", "logica"],
        ),
        (
            "reconocimiento de patrones",
            &["reconocimiento de patrones", "deteccion de patrones"],
        ),
        ("empatia", &["empatia", "empatico", "empatica"]),
        (
            "perseverancia",
            &["perseverancia", "constancia", "persistente"],
        ),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Claves compactas (sin separadores) para tolerar variantes de escritura
/// como "data-entry" o "trabajoenequipo".
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

fn compact_key(input: &str) -> String {
    input.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn fuzzy_match_canonical(compact: &str) -> Option<&'static str> {
    if compact.len() < 5 {
        return None;
    }

    let mut best: Option<(&'static str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        // tokens cortos (js, sql, git) sólo por coincidencia exacta: el
        // fuzzy sobre ellos produce demasiados falsos positivos
        if alias.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some(*canonical);
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical)
}

fn match_single_token(token: &str) -> Option<&'static str> {
    if token.is_empty() {
        return None;
    }
    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some(*canonical);
    }
    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some(*canonical);
    }
    fuzzy_match_canonical(&compact)
}

fn match_phrase(phrase: &str) -> Option<&'static str> {
    if let Some(canonical) = ALIAS_TO_CANONICAL.get(phrase) {
        return Some(*canonical);
    }
    COMPACT_ALIAS_TO_CANONICAL.get(&compact_key(phrase)).copied()
}

/// Extrae el conjunto de palabras clave canónicas presentes en un texto
/// libre (aptitudes del candidato o requisitos de la oferta). Escanea
/// unigramas con tolerancia a erratas y n-gramas de hasta tres palabras
/// por coincidencia exacta o compacta.
pub fn extract_skill_keywords(text: &str) -> HashSet<String> {
    let folded = fold_text(text);
    if folded.is_empty() {
        return HashSet::new();
    }

    let tokens: Vec<&str> = folded
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .collect();

    let mut found = HashSet::new();

    for (i, token) in tokens.iter().enumerate() {
        if let Some(canonical) = match_single_token(token) {
            found.insert(canonical.to_string());
        }
        for n in 2..=3usize {
            if i + n > tokens.len() {
                break;
            }
            let phrase = tokens[i..i + n].join(" ");
            if let Some(canonical) = match_phrase(&phrase) {
                found.insert(canonical.to_string());
            }
        }
    }

    found
}
