use crate::commands::RunStatus;
use crate::presentation::ConsoleRenderer;
use anyhow::{Context, Result};
use mjreport_core::{Category, Report};
use mjreport_types::Record;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub lines: bool,
    pub strict: bool,
}

pub fn handle(
    renderer: &ConsoleRenderer,
    category: Category,
    input: Option<&Path>,
    options: FormatOptions,
) -> Result<RunStatus> {
    let source = InputSource::from_arg(input);
    let content = source.read()?;

    let failed = if options.lines {
        let (records, skipped) = parse_lines(&content, renderer);
        let reports: Vec<Report> = records
            .iter()
            .map(|record| Report::build(category, record))
            .collect();
        renderer.render_reports(&reports)?;
        skipped > 0 || reports.iter().any(|r| r.failed)
    } else {
        let record = Record::from_json_str(&content)
            .with_context(|| format!("Invalid record in {}", source))?;
        let report = Report::build(category, &record);
        renderer.render_report(&report)?;
        report.failed
    };

    if options.strict && failed {
        Ok(RunStatus::UpstreamFailure)
    } else {
        Ok(RunStatus::Success)
    }
}

/// Parse newline-delimited records, skipping blank lines.
///
/// Lines that do not hold a JSON object are reported and skipped; the count
/// of skipped lines is returned alongside the records.
fn parse_lines(content: &str, renderer: &ConsoleRenderer) -> (Vec<Record>, usize) {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match Record::from_json_str(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                renderer.warn(&format!("skipping line {}: {}", index + 1, e));
            }
        }
    }

    (records, skipped)
}

enum InputSource<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> InputSource<'a> {
    fn from_arg(input: Option<&'a Path>) -> Self {
        match input {
            Some(path) if path != Path::new("-") => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")
            }
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

impl std::fmt::Display for InputSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
