//! Task status query reports.
//!
//! The request block is always printed. What follows depends on the nested
//! `response`: a successful image task lists the image and its actions, a
//! successful describe task lists shortened descriptions, and anything that
//! did not succeed is dumped as compact JSON.

use mjreport_types::Record;

use super::failure::format_error;
use super::text::{dimensions, truncate_with_ellipsis};
use crate::Category;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub fn format_task_result(record: &Record) -> String {
    if Category::Task.is_failure(record) {
        return format_error(record);
    }

    let request = record.section("request");
    let response = record.section("response");

    let mut lines = vec![
        format!("Task ID: {}", record.text("id")),
        format!("Type: {}", record.text("type")),
        format!("Created At: {}", record.text("created_at")),
        format!("Finished At: {}", record.text("finished_at")),
        String::new(),
        "Request:".to_string(),
        format!("  Action: {}", request.text("action")),
        format!("  Prompt: {}", request.text("prompt")),
        format!("  Mode: {}", request.text("mode")),
        String::new(),
    ];

    if response.is_truthy("success") {
        lines.push("Response: Success".to_string());
        lines.push(String::new());
        push_success_details(&mut lines, &response);
    } else {
        lines.push(format!("Response: {}", response));
    }

    lines.join("\n")
}

fn push_success_details(lines: &mut Vec<String>, response: &Record) {
    if response.contains("image_url") {
        lines.push(format!("Image ID: {}", response.text("image_id")));
        lines.push(format!("Image URL: {}", response.text("image_url")));
        lines.push(format!(
            "Image Size: {}",
            dimensions(&response.text("image_width"), &response.text("image_height"))
        ));
        lines.push(String::new());

        let actions = response.list("actions");
        if !actions.is_empty() {
            lines.push(format!("Available Actions: {}", actions.join(", ")));
            lines.push(String::new());
        }
    } else if response.contains("descriptions") {
        lines.push("Descriptions:".to_string());
        for (i, description) in response.list("descriptions").iter().enumerate() {
            lines.push(format!(
                "  {}. {}",
                i + 1,
                truncate_with_ellipsis(description, DESCRIPTION_PREVIEW_CHARS)
            ));
        }
        lines.push(String::new());
    }
}
