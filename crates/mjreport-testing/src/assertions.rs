//! Assertions on rendered report text.

use anyhow::Result;

/// Assert that `report` contains `heading` immediately followed by `items`
/// as a one-based numbered list.
pub fn assert_numbered_section(report: &str, heading: &str, items: &[&str]) -> Result<()> {
    let lines: Vec<&str> = report.lines().collect();
    let Some(start) = lines.iter().position(|l| *l == heading) else {
        anyhow::bail!("Section '{}' not found in report:\n{}", heading, report);
    };

    for (i, item) in items.iter().enumerate() {
        let expected = format!("  {}. {}", i + 1, item);
        match lines.get(start + 1 + i) {
            Some(actual) if *actual == expected => {}
            Some(actual) => anyhow::bail!(
                "Section '{}' line {}: expected '{}', got '{}'",
                heading,
                i + 1,
                expected,
                actual
            ),
            None => anyhow::bail!("Section '{}' ended before item {}", heading, i + 1),
        }
    }

    Ok(())
}

/// Assert that `report` has no line equal to `heading`.
pub fn assert_no_section(report: &str, heading: &str) -> Result<()> {
    if report.lines().any(|l| l == heading) {
        anyhow::bail!("Unexpected section '{}' in report:\n{}", heading, report);
    }
    Ok(())
}

/// Assert that `report` is exactly one error line.
pub fn assert_error_report(report: &str, code: &str, message: &str) -> Result<()> {
    let expected = format!("Error: {} - {}", code, message);
    if report != expected {
        anyhow::bail!("Expected '{}', got '{}'", expected, report);
    }
    Ok(())
}
