//! Parse LLM output into a project record

use crate::corrections::preprocess;
use crate::error::ExtractorError;
use crate::normalize::{parse_date, parse_goal};
use chrono::NaiveDate;
use kickpredict_domain::{default_deadline, Category, CountryCode, ProjectRecord};
use serde_json::{Map, Value};
use tracing::debug;

/// Name used when the LLM omits one
pub const DEFAULT_NAME: &str = "My Project";

/// Goal used when the LLM omits one
pub const DEFAULT_GOAL: f64 = 10_000.0;

/// Parse the first JSON object in an LLM reply into a record
///
/// Missing fields fall back to defaults; present fields go through the same
/// normalization as local extraction.
pub fn parse_llm_response(response: &str, today: NaiveDate) -> Result<ProjectRecord, ExtractorError> {
    let object = first_json_object(response)?;

    let name = string_field(&object, "name").unwrap_or(DEFAULT_NAME);

    let category = string_field(&object, "main_category")
        .map(Category::normalize)
        .unwrap_or(Category::FALLBACK);

    let country = string_field(&object, "country")
        .map(parse_country)
        .unwrap_or_default();

    let goal = match object.get("usd_goal_real") {
        None | Some(Value::Null) => DEFAULT_GOAL,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ExtractorError::InvalidGoal(n.to_string()))?,
        Some(Value::String(s)) => parse_goal(s)?,
        Some(other) => return Err(ExtractorError::InvalidGoal(other.to_string())),
    };

    let launched = match string_field(&object, "launched") {
        Some(raw) => parse_date("launched", raw)?,
        None => today,
    };
    let deadline = match string_field(&object, "deadline") {
        Some(raw) => parse_date("deadline", raw)?,
        None => default_deadline(launched)?,
    };

    Ok(ProjectRecord::new(name, category, country, goal, launched, deadline)?)
}

/// Country from a code or a known country name; unknown values give the default
fn parse_country(raw: &str) -> CountryCode {
    CountryCode::parse(raw)
        .or_else(|| CountryCode::parse(preprocess(raw).trim()))
        .unwrap_or_else(|| {
            debug!(country = raw, "Unrecognized country from LLM, using default");
            CountryCode::default()
        })
}

/// Non-blank string value of a field
fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Decode the first complete JSON object, ignoring surrounding prose or
/// markdown fences
fn first_json_object(response: &str) -> Result<Map<String, Value>, ExtractorError> {
    let start = response
        .find('{')
        .ok_or_else(|| ExtractorError::InvalidFormat("No JSON object in response".to_string()))?;

    let value = serde_json::Deserializer::from_str(&response[start..])
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| ExtractorError::InvalidFormat("Empty JSON".to_string()))??;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ExtractorError::InvalidFormat("Expected JSON object".to_string())),
    }
}
