use mjreport_types::Record;

const UNKNOWN_CODE: &str = "unknown";
const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Single-line rendering of the record's `error` section.
pub fn format_error(record: &Record) -> String {
    let error = record.section("error");
    format!(
        "Error: {} - {}",
        error.text_or("code", UNKNOWN_CODE),
        error.text_or("message", UNKNOWN_MESSAGE)
    )
}
