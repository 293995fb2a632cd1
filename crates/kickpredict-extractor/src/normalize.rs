//! Numeric and date normalization of captured field text

use crate::error::ExtractorError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static THOUSANDS_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:k|mil|000)\b").expect("suffix pattern is valid"));

static FIRST_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("integer pattern is valid"));

/// Whether the text right after a captured amount multiplies it by 1000
///
/// `rest` starts where the amount ends. Accepts `k` and `mil`, and the
/// `000` that preprocessing writes in place of a detached `k` or `mil`.
///
/// ```
/// use kickpredict_extractor::has_thousands_suffix;
///
/// assert!(has_thousands_suffix("k"));
/// assert!(has_thousands_suffix(" mil reais"));
/// assert!(!has_thousands_suffix(" País: US"));
/// ```
pub fn has_thousands_suffix(rest: &str) -> bool {
    THOUSANDS_SUFFIX.is_match(rest)
}

/// Multiply the first integer in `value` by 1000
///
/// Text without digits is returned unchanged.
pub fn scale_thousands(value: &str) -> Result<String, ExtractorError> {
    let Some(digits) = FIRST_INTEGER.find(value) else {
        return Ok(value.to_string());
    };
    let scaled = digits
        .as_str()
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(1000))
        .ok_or_else(|| ExtractorError::InvalidGoal(value.to_string()))?;
    Ok(scaled.to_string())
}

/// Parse a captured goal amount
///
/// Commas are thousands separators. A value whose last period is followed by
/// exactly two digits is a decimal; otherwise periods are thousands
/// separators too.
///
/// # Examples
///
/// ```
/// use kickpredict_extractor::parse_goal;
///
/// assert_eq!(parse_goal("10,000").unwrap(), 10000.0);
/// assert_eq!(parse_goal("10.00").unwrap(), 10.0);
/// assert_eq!(parse_goal("10.000").unwrap(), 10000.0);
/// ```
pub fn parse_goal(raw: &str) -> Result<f64, ExtractorError> {
    let invalid = || ExtractorError::InvalidGoal(raw.to_string());

    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    let has_cents = cleaned
        .rsplit_once('.')
        .is_some_and(|(_, fraction)| fraction.len() == 2);
    let number = if has_cents {
        cleaned
    } else {
        cleaned.replace('.', "")
    };

    let goal: f64 = number.parse().map_err(|_| invalid())?;
    if !goal.is_finite() || goal <= 0.0 {
        return Err(invalid());
    }
    Ok(goal)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ExtractorError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ExtractorError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_goal_separators() {
        assert_eq!(parse_goal("10,000").unwrap(), 10000.0);
        assert_eq!(parse_goal("10.00").unwrap(), 10.0);
        assert_eq!(parse_goal("10.000").unwrap(), 10000.0);
        assert_eq!(parse_goal("1.234.567").unwrap(), 1234567.0);
        assert_eq!(parse_goal("2500.50").unwrap(), 2500.5);
        assert_eq!(parse_goal("1,500.75").unwrap(), 1500.75);
    }

    #[test]
    fn test_parse_goal_rejects_garbage() {
        assert!(parse_goal("").is_err());
        assert!(parse_goal(",").is_err());
        assert!(parse_goal("0").is_err());
        assert!(parse_goal("1.234.56").is_err());
        assert!(parse_goal("inf").is_err());
        assert!(parse_goal("1e5").is_err());
    }

    #[test]
    fn test_thousands_suffix_detection() {
        assert!(has_thousands_suffix("k"));
        assert!(has_thousands_suffix("K dólares"));
        assert!(has_thousands_suffix(" mil reais"));
        assert!(has_thousands_suffix(" 000 dollars"));
        assert!(!has_thousands_suffix(""));
        assert!(!has_thousands_suffix(" kits"));
        assert!(!has_thousands_suffix(" milhares de fãs"));
        assert!(!has_thousands_suffix(" País: US Início: 2025-07-03"));
        // Only the amount's own suffix counts, not one later in the text
        assert!(!has_thousands_suffix(" Nome: Robo 5k"));
    }

    #[test]
    fn test_scale_thousands() {
        assert_eq!(scale_thousands("5").unwrap(), "5000");
        assert_eq!(scale_thousands("10,000").unwrap(), "10000");
        assert_eq!(scale_thousands("abc").unwrap(), "abc");
        assert!(scale_thousands("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("launched", "2025-07-03").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()
        );
        assert!(matches!(
            parse_date("deadline", "2025-13-45"),
            Err(ExtractorError::InvalidDate { field: "deadline", .. })
        ));
    }
}
