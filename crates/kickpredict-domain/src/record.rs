//! Project record module - the normalized output of extraction

use crate::{Category, CountryCode};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Campaign length used when the deadline is missing or not after launch
pub const DEFAULT_CAMPAIGN_DAYS: u64 = 30;

/// Reasons a project record cannot be constructed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Name is empty after trimming
    #[error("Project name is empty")]
    EmptyName,

    /// Goal is zero, negative, NaN or infinite
    #[error("Invalid funding goal: {0}")]
    InvalidGoal(f64),

    /// Date arithmetic left the supported calendar range
    #[error("Date out of range: {0}")]
    DateOutOfRange(NaiveDate),
}

/// A normalized crowdfunding project
///
/// Records are immutable once built. [`ProjectRecord::new`] enforces the
/// invariants: non-empty name, finite positive goal, and a deadline strictly
/// after the launch date.
///
/// The serialized form is the request body of the prediction service:
/// `{ name, main_category, country, usd_goal_real, launched, deadline }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectRecord")]
pub struct ProjectRecord {
    name: String,
    #[serde(rename = "main_category")]
    category: Category,
    country: CountryCode,
    #[serde(rename = "usd_goal_real")]
    goal: f64,
    launched: NaiveDate,
    deadline: NaiveDate,
}

/// Unchecked wire form, validated through [`ProjectRecord::new`]
#[derive(Deserialize)]
struct RawProjectRecord {
    name: String,
    main_category: Category,
    #[serde(default)]
    country: CountryCode,
    usd_goal_real: f64,
    launched: NaiveDate,
    deadline: NaiveDate,
}

impl TryFrom<RawProjectRecord> for ProjectRecord {
    type Error = RecordError;

    fn try_from(raw: RawProjectRecord) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.main_category,
            raw.country,
            raw.usd_goal_real,
            raw.launched,
            raw.deadline,
        )
    }
}

impl ProjectRecord {
    /// Build a record, repairing the deadline when it is not after launch
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use kickpredict_domain::{Category, CountryCode, ProjectRecord};
    ///
    /// let launched = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
    /// let too_early = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    /// let record = ProjectRecord::new(
    ///     "power", Category::Games, CountryCode::US, 10_000.0, launched, too_early,
    /// ).unwrap();
    /// assert_eq!(record.deadline(), NaiveDate::from_ymd_opt(2025, 8, 2).unwrap());
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: Category,
        country: CountryCode,
        goal: f64,
        launched: NaiveDate,
        deadline: NaiveDate,
    ) -> Result<Self, RecordError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if !goal.is_finite() || goal <= 0.0 {
            return Err(RecordError::InvalidGoal(goal));
        }

        let deadline = if deadline <= launched {
            default_deadline(launched)?
        } else {
            deadline
        };

        Ok(Self {
            name,
            category,
            country,
            goal,
            launched,
            deadline,
        })
    }

    /// Project title
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Main category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Country code
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// Funding goal
    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Launch date
    pub fn launched(&self) -> NaiveDate {
        self.launched
    }

    /// Deadline, always after the launch date
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Campaign length in days
    pub fn duration_days(&self) -> i64 {
        (self.deadline - self.launched).num_days()
    }

    /// Render the record in the labelled template the extractor understands.
    ///
    /// Extracting this text yields the same record again.
    pub fn to_structured_message(&self) -> String {
        format!(
            "Nome: {} Categoria: {} Meta: ${} País: {} Início: {} Fim: {}",
            self.name,
            self.category,
            format_plain_goal(self.goal),
            self.country,
            self.launched.format("%Y-%m-%d"),
            self.deadline.format("%Y-%m-%d"),
        )
    }
}

/// Launch date plus [`DEFAULT_CAMPAIGN_DAYS`]
pub fn default_deadline(launched: NaiveDate) -> Result<NaiveDate, RecordError> {
    launched
        .checked_add_days(Days::new(DEFAULT_CAMPAIGN_DAYS))
        .ok_or(RecordError::DateOutOfRange(launched))
}

/// Goal without separators; two decimals only when there are cents
fn format_plain_goal(goal: f64) -> String {
    if goal.fract() == 0.0 {
        format!("{:.0}", goal)
    } else {
        format!("{:.2}", goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(goal: f64, launched: NaiveDate, deadline: NaiveDate) -> Result<ProjectRecord, RecordError> {
        ProjectRecord::new("power", Category::Games, CountryCode::US, goal, launched, deadline)
    }

    #[test]
    fn test_valid_record() {
        let r = record(10_000.0, date(2025, 7, 3), date(2025, 8, 2)).unwrap();
        assert_eq!(r.name(), "power");
        assert_eq!(r.duration_days(), 30);
    }

    #[test]
    fn test_deadline_before_launch_is_repaired() {
        let r = record(10_000.0, date(2025, 7, 3), date(2025, 7, 1)).unwrap();
        assert_eq!(r.deadline(), date(2025, 8, 2));
    }

    #[test]
    fn test_deadline_equal_to_launch_is_repaired() {
        let r = record(10_000.0, date(2025, 7, 3), date(2025, 7, 3)).unwrap();
        assert_eq!(r.deadline(), date(2025, 8, 2));
    }

    #[test]
    fn test_invalid_goals() {
        let (l, d) = (date(2025, 7, 3), date(2025, 8, 2));
        assert_eq!(record(0.0, l, d), Err(RecordError::InvalidGoal(0.0)));
        assert!(record(-5.0, l, d).is_err());
        assert!(record(f64::NAN, l, d).is_err());
        assert!(record(f64::INFINITY, l, d).is_err());
    }

    #[test]
    fn test_name_is_trimmed_and_required() {
        let (l, d) = (date(2025, 7, 3), date(2025, 8, 2));
        let r = ProjectRecord::new("  power  ", Category::Games, CountryCode::US, 1.0, l, d).unwrap();
        assert_eq!(r.name(), "power");
        let err = ProjectRecord::new("   ", Category::Games, CountryCode::US, 1.0, l, d);
        assert_eq!(err, Err(RecordError::EmptyName));
    }

    #[test]
    fn test_serializes_to_prediction_request() {
        let r = record(10_000.0, date(2025, 7, 3), date(2025, 8, 2)).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "power",
                "main_category": "Games",
                "country": "US",
                "usd_goal_real": 10000.0,
                "launched": "2025-07-03",
                "deadline": "2025-08-02"
            })
        );
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let json = r#"{"name":"x","main_category":"Music","usd_goal_real":-1,
            "launched":"2025-07-03","deadline":"2025-08-02"}"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }

    #[test]
    fn test_structured_message() {
        let r = ProjectRecord::new(
            "Eco Bottle",
            Category::FilmVideo,
            CountryCode::parse("br").unwrap(),
            2_500.5,
            date(2025, 7, 3),
            date(2025, 8, 2),
        )
        .unwrap();
        assert_eq!(
            r.to_structured_message(),
            "Nome: Eco Bottle Categoria: Film & Video Meta: $2500.50 País: BR Início: 2025-07-03 Fim: 2025-08-02"
        );
    }
}
