//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::render::thousands;
use colored::*;
use kickpredict_domain::{CategoryInfo, HealthStatus, ProjectRecord};
use kickpredict_extractor::ExtractionMethod;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an extracted project record.
    pub fn format_record(&self, record: &ProjectRecord, method: &ExtractionMethod) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "record": record,
                "method": method,
            }))?),
            OutputFormat::Table => {
                let goal = format!("${}", thousands(record.goal(), 2));
                let country = match record.country().display_name() {
                    Some(name) => format!("{} ({})", record.country(), name),
                    None => record.country().to_string(),
                };
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Name", record.name()]);
                builder.push_record(["Category", record.category().as_str()]);
                builder.push_record(["Goal", &goal]);
                builder.push_record(["Country", &country]);
                builder.push_record(["Launched", &record.launched().to_string()]);
                builder.push_record(["Deadline", &record.deadline().to_string()]);
                builder.push_record(["Duration", &format!("{} days", record.duration_days())]);
                builder.push_record(["Method", &method.to_string()]);
                Ok(self.render_table(builder))
            }
            OutputFormat::Quiet => Ok(record.to_structured_message()),
        }
    }

    /// Format the category catalog.
    pub fn format_categories(&self, categories: &[CategoryInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(categories)?),
            OutputFormat::Table => {
                if categories.is_empty() {
                    return Ok(self.colorize("No categories found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Category", "Success", "Description"]);
                for info in categories {
                    builder.push_record([
                        info.value.as_str(),
                        info.avg_success.as_str(),
                        info.description.as_str(),
                    ]);
                }
                Ok(self.render_table(builder))
            }
            OutputFormat::Quiet => Ok(categories
                .iter()
                .map(|info| info.value.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a health answer.
    pub fn format_health(&self, health: &HealthStatus) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(health)?),
            OutputFormat::Quiet => Ok(health.model_loaded.to_string()),
            OutputFormat::Table => Ok(if health.model_loaded {
                self.success("Model loaded and ready")
            } else {
                self.warning("Model not loaded yet; run 'train' and check again in a few minutes")
            }),
        }
    }

    fn render_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a chat reply.
    pub fn reply(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kickpredict_domain::{Category, CountryCode};

    fn record() -> ProjectRecord {
        ProjectRecord::new(
            "power",
            Category::Games,
            CountryCode::parse("BR").unwrap(),
            10_000.0,
            NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_record_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&record(), &ExtractionMethod::Local).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["record"]["main_category"], "Games");
        assert_eq!(value["record"]["usd_goal_real"], 10000.0);
        assert_eq!(value["method"]["kind"], "local");
    }

    #[test]
    fn test_record_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&record(), &ExtractionMethod::Local).unwrap();
        assert!(output.contains("$10,000.00"));
        assert!(output.contains("BR (Brasil)"));
        assert!(output.contains("30 days"));
    }

    #[test]
    fn test_record_quiet_is_structured_message() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_record(&record(), &ExtractionMethod::Local).unwrap();
        assert!(output.starts_with("Nome: power Categoria: Games"));
    }

    #[test]
    fn test_empty_categories() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_categories(&[]).unwrap();
        assert!(output.contains("No categories found"));
    }

    #[test]
    fn test_health_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_health(&HealthStatus::default()).unwrap();
        assert_eq!(output, "false");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
