//! Token corrections applied before pattern matching
//!
//! Fixes common misspellings, currency words, value abbreviations, country
//! names and Portuguese category names. All keys are matched as whole words,
//! case-insensitively, in a single left-to-right pass. Longer keys win over
//! shorter ones at the same position, and replaced text is never rescanned,
//! so running the pass twice gives the same result as running it once.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Lowercase key and its replacement
pub const CORRECTIONS: &[(&str, &str)] = &[
    // Typos
    ("categria", "categoria"),
    ("categorai", "categoria"),
    ("catgoria", "categoria"),
    ("categora", "categoria"),
    // Currency words
    ("dolar", "dollar"),
    ("dolares", "dollars"),
    ("reais", "dollars"),
    // Value abbreviations
    ("k ", "000 "),
    ("mil ", "000 "),
    // Countries
    ("brasil", "BR"),
    ("estados unidos", "US"),
    ("eua", "US"),
    ("usa", "US"),
    // Portuguese category names
    ("tecnologia", "Technology"),
    ("jogos", "Games"),
    ("música", "Music"),
    ("musica", "Music"),
    ("arte", "Art"),
    ("filmes", "Film & Video"),
    ("filme", "Film & Video"),
    ("video", "Film & Video"),
    ("vídeo", "Film & Video"),
    ("film & video", "Film & Video"),
    ("design", "Design"),
    ("comida", "Food"),
    ("teatro", "Theater"),
    ("dança", "Dance"),
    ("danca", "Dance"),
    ("fotografia", "Photography"),
    ("moda", "Fashion"),
    ("artesanato", "Crafts"),
    ("publicação", "Publishing"),
    ("publicacao", "Publishing"),
    ("quadrinhos", "Comics"),
    ("jornalismo", "Journalism"),
];

static REPLACEMENTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CORRECTIONS.iter().copied().collect());

static CORRECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut keys: Vec<&str> = CORRECTIONS.iter().map(|(key, _)| *key).collect();
    keys.sort_by_key(|key| std::cmp::Reverse(key.chars().count()));
    let alternation = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("correction pattern is valid")
});

/// Apply the correction table to a message
///
/// # Examples
///
/// ```
/// use kickpredict_extractor::preprocess;
///
/// assert_eq!(preprocess("Categria: jogos"), "categoria: Games");
/// assert_eq!(preprocess("feito no Brasil"), "feito no BR");
/// ```
pub fn preprocess(message: &str) -> String {
    CORRECTION_PATTERN
        .replace_all(message, |caps: &Captures<'_>| {
            let matched = &caps[0];
            REPLACEMENTS
                .get(matched.to_lowercase().as_str())
                .map(|replacement| replacement.to_string())
                .unwrap_or_else(|| matched.to_string())
        })
        .into_owned()
}
