use mjreport_types::Record;

use super::failure::format_error;
use crate::Category;

pub fn format_describe_result(record: &Record) -> String {
    if Category::Describe.is_failure(record) {
        return format_error(record);
    }

    let descriptions = record.list("descriptions");
    if descriptions.is_empty() {
        return "No descriptions returned.".to_string();
    }

    let mut lines = vec!["Image Descriptions:".to_string(), String::new()];
    for (i, description) in descriptions.into_iter().enumerate() {
        lines.push(format!("--- Option {} ---", i + 1));
        lines.push(description);
        lines.push(String::new());
    }

    lines.join("\n")
}
