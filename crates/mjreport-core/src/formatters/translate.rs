use mjreport_types::Record;

use super::failure::format_error;
use crate::Category;

pub fn format_translate_result(record: &Record) -> String {
    if Category::Translate.is_failure(record) {
        return format_error(record);
    }

    if !record.is_truthy("content") {
        return "No translation returned.".to_string();
    }

    format!("Translated Content:\n\n{}", record.text("content"))
}
