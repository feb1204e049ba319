use crate::types::OutputFormat;
use anyhow::Result;
use mjreport_core::{Category, FailureIndicator, Report};
use owo_colors::OwoColorize;
use serde::Serialize;

/// One line of `mjreport categories` output.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub name: Category,
    pub failure_indicator: FailureIndicator,
}

impl From<Category> for CategoryRow {
    fn from(category: Category) -> Self {
        Self {
            name: category,
            failure_indicator: category.failure_indicator(),
        }
    }
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
    warning_color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self {
            format,
            color,
            warning_color: false,
        }
    }

    /// Style `Warning:` lines on stderr, independently of stdout styling.
    pub fn with_warning_color(mut self, warning_color: bool) -> Self {
        self.warning_color = warning_color;
        self
    }

    pub fn render_report(&self, report: &Report) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Plain => println!("{}", self.report_text(report)),
        }
        Ok(())
    }

    /// Plain output separates consecutive reports with one blank line.
    pub fn render_reports(&self, reports: &[Report]) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
            OutputFormat::Plain => {
                for (i, report) in reports.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("{}", self.report_text(report));
                }
            }
        }
        Ok(())
    }

    pub fn render_categories(&self, rows: &[CategoryRow]) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
            OutputFormat::Plain => print!("{}", self.categories_text(rows)),
        }
        Ok(())
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{}", self.warning_text(message));
    }

    fn warning_text(&self, message: &str) -> String {
        if self.warning_color {
            format!("{} {}", "Warning:".yellow(), message)
        } else {
            format!("Warning: {}", message)
        }
    }

    fn report_text(&self, report: &Report) -> String {
        if self.color && report.failed {
            report.text.red().to_string()
        } else {
            report.text.clone()
        }
    }

    fn categories_text(&self, rows: &[CategoryRow]) -> String {
        let mut out = format!("{:<12} FAILS WHEN\n", "CATEGORY");
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for row in rows {
            let name = if self.color {
                row.name.as_str().bold().to_string()
            } else {
                row.name.as_str().to_string()
            };
            // Pad before styling so escape codes do not count toward the width.
            let padding = " ".repeat(12usize.saturating_sub(row.name.as_str().len()));
            out.push_str(&format!(
                "{}{} {}\n",
                name,
                padding,
                row.failure_indicator.describe()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_report() -> Report {
        Report {
            category: Category::Video,
            failed: true,
            text: "Error: E - m".to_string(),
        }
    }

    #[test]
    fn test_failed_report_is_red_when_colored() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, true);
        let text = renderer.report_text(&failed_report());
        assert!(text.contains("\u{1b}[31m"));
        assert!(text.contains("Error: E - m"));
    }

    #[test]
    fn test_report_text_is_untouched_without_color() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, false);
        assert_eq!(renderer.report_text(&failed_report()), "Error: E - m");
    }

    #[test]
    fn test_warning_color_is_independent_of_output() {
        let renderer =
            ConsoleRenderer::new(OutputFormat::Json, false).with_warning_color(true);
        let text = renderer.warning_text("skipping line 2");
        assert!(text.contains("\u{1b}[33m"));
        assert!(text.ends_with(" skipping line 2"));

        let plain = ConsoleRenderer::new(OutputFormat::Plain, true);
        assert_eq!(plain.warning_text("skipping line 2"), "Warning: skipping line 2");
    }

    #[test]
    fn test_categories_table() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, false);
        let rows: Vec<CategoryRow> = [Category::Imagine, Category::Task]
            .into_iter()
            .map(CategoryRow::from)
            .collect();

        insta::assert_snapshot!(renderer.categories_text(&rows), @r"
        CATEGORY     FAILS WHEN
        ----------------------------------------
        imagine      `success` absent or falsy
        task         `error` key present
        ");
    }
}
