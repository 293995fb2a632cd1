//! Per-field regular expressions
//!
//! Each field has an ordered list of case-insensitive patterns, from explicit
//! labels (`nome: X`) to looser phrasings. The first pattern that matches
//! wins and its first capture group, trimmed, is the field value.

use crate::normalize::has_thousands_suffix;
use crate::types::RawFields;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Project attribute a pattern list captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Project title
    Name,
    /// Main category
    Category,
    /// Funding goal
    Goal,
    /// Country code
    Country,
    /// Launch date
    Launched,
    /// Deadline
    Deadline,
}

impl Field {
    /// Field name used in logs and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Goal => "goal",
            Field::Country => "country",
            Field::Launched => "launched",
            Field::Deadline => "deadline",
        }
    }
}

/// Ordered patterns for one field
#[derive(Debug)]
pub struct FieldPatterns {
    /// Field the patterns capture
    pub field: Field,
    /// Patterns, most specific first
    pub patterns: Vec<Regex>,
}

impl FieldPatterns {
    fn new(field: Field, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| {
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .expect("field pattern is valid")
            })
            .collect();
        Self { field, patterns }
    }

    /// First capture of the first matching pattern, trimmed
    pub fn capture(&self, text: &str) -> Option<String> {
        self.capture_with_end(text).map(|(value, _)| value)
    }

    /// Like [`capture`](Self::capture), plus the byte offset where the
    /// capture group ends in `text`
    pub fn capture_with_end(&self, text: &str) -> Option<(String, usize)> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| (m.as_str().trim().to_string(), m.end()))
        })
    }
}

/// Money amount: digits with comma separators, dot thousands groups, and
/// optional cents
macro_rules! amount {
    () => {
        r"([\d,]+(?:\.\d{3})*(?:\.\d{2}\b)?)"
    };
}

macro_rules! date {
    () => {
        r"(\d{4}-\d{2}-\d{2})"
    };
}

/// Pattern table for all six fields
pub static FIELD_PATTERNS: Lazy<Vec<FieldPatterns>> = Lazy::new(|| {
    vec![
        FieldPatterns::new(
            Field::Name,
            &[
                r"nome:\s*([^\n,]+?)(?:\s+categoria:|$)",
                r"projeto:\s*([^\n,]+?)(?:\s+categoria:|$)",
                r"título:\s*([^\n,]+?)(?:\s+categoria:|$)",
                r"meu projeto (?:é|e|se chama)\s+([^\n,]+?)(?:\s+categoria|$)",
                r"projeto\s+([^\n,]+?)\s+(?:categoria|da categoria)",
                r"analise?\s+(?:o\s+)?(?:meu\s+)?projeto\s+([^\n,]+?)\s+categoria",
                r"(?:projeto|nome)\s*:?\s*([a-zA-Z0-9\s_-]+?)(?:\s*(?:categoria|tipo|meta|$))",
            ],
        ),
        FieldPatterns::new(
            Field::Category,
            &[
                r"categoria:\s*([^\n,]+?)(?:\s+meta:|$)",
                r"tipo:\s*([^\n,]+?)(?:\s+meta:|$)",
                r"category:\s*([^\n,]+?)(?:\s+meta:|$)",
                r"(?:da\s+)?categoria\s+([^\n,]+?)(?:\s+meta|$)",
                r"é\s+(?:um|uma)\s+([^\n,]+?)(?:\s+meta|com|$)",
                r#"categoria[:\s]+["']([^"']+)["']"#,
                r"categoria[:\s]+\(([^)]+)\)",
                r"categoria\s*:?\s*([a-zA-Z\s&]+?)(?:\s*(?:meta|valor|$))",
            ],
        ),
        FieldPatterns::new(
            Field::Goal,
            &[
                concat!(r"meta:\s*\$?\s*", amount!()),
                concat!(r"objetivo:\s*\$?\s*", amount!()),
                concat!(r"goal:\s*\$?\s*", amount!()),
                concat!(r"valor:\s*\$?\s*", amount!()),
                r"meta\s*:?\s*(\d+)\s*(?:k|mil)",
                r"(\d+)\s*(?:k|mil)\s*(?:dólares|dolares|reais|dollars)",
                concat!(r"\$\s*", amount!()),
                concat!(r"R\$\s*", amount!()),
                r"meta\s*:?\s*(?:de\s+)?\$?\s*([\d,\.]+)",
            ],
        ),
        FieldPatterns::new(
            Field::Country,
            &[
                r"país:\s*([A-Za-z]{2})",
                r"pais:\s*([A-Za-z]{2})",
                r"country:\s*([A-Za-z]{2})",
                r"local:\s*([A-Za-z]{2})",
                r"de\s+([A-Za-z]{2})(?:\s|$)",
            ],
        ),
        FieldPatterns::new(
            Field::Launched,
            &[
                concat!(r"início:\s*", date!()),
                concat!(r"inicio:\s*", date!()),
                concat!(r"começa:\s*", date!()),
                concat!(r"lançamento:\s*", date!()),
                concat!(r"start:\s*", date!()),
                concat!(r"data\s+(?:de\s+)?início:\s*", date!()),
            ],
        ),
        FieldPatterns::new(
            Field::Deadline,
            &[
                concat!(r"fim:\s*", date!()),
                concat!(r"término:\s*", date!()),
                concat!(r"termino:\s*", date!()),
                concat!(r"deadline:\s*", date!()),
                concat!(r"end:\s*", date!()),
                concat!(r"data\s+(?:de\s+)?fim:\s*", date!()),
                concat!(r"até:\s*", date!()),
            ],
        ),
    ]
});

/// Run every field's pattern list over a preprocessed message
pub(crate) fn capture_fields(text: &str) -> RawFields {
    let mut fields = RawFields::default();
    for table in FIELD_PATTERNS.iter() {
        let found = table.capture_with_end(text);
        if table.field == Field::Goal {
            fields.goal_thousands = found
                .as_ref()
                .is_some_and(|(_, end)| has_thousands_suffix(&text[*end..]));
        }
        let value = found.map(|(value, _)| value);
        debug!(field = table.field.as_str(), value = ?value, "Field capture");
        let slot = match table.field {
            Field::Name => &mut fields.name,
            Field::Category => &mut fields.category,
            Field::Goal => &mut fields.goal,
            Field::Country => &mut fields.country,
            Field::Launched => &mut fields.launched,
            Field::Deadline => &mut fields.deadline,
        };
        *slot = value;
    }
    fields
}
