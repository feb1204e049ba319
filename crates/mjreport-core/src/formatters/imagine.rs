use mjreport_types::Record;

use super::failure::format_error;
use super::text::{dimensions, numbered_lines};
use crate::Category;

/// Report for an image generation response.
pub fn format_imagine_result(record: &Record) -> String {
    if Category::Imagine.is_failure(record) {
        return format_error(record);
    }

    let mut lines = image_lines(record);

    let actions = record.list("actions");
    if !actions.is_empty() {
        lines.push("Available Actions:".to_string());
        lines.push(format!("  {}", actions.join(", ")));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Header, image, raw image, progress, and sub image lines shared with edits.
pub(crate) fn image_lines(record: &Record) -> Vec<String> {
    let mut lines = vec![
        format!("Task ID: {}", record.text("task_id")),
        format!("Image ID: {}", record.text("image_id")),
        String::new(),
        format!("Image URL: {}", record.text("image_url")),
        format!(
            "Image Size: {}",
            dimensions(&record.text("image_width"), &record.text("image_height"))
        ),
        String::new(),
        format!("Raw Image URL: {}", record.text("raw_image_url")),
        format!(
            "Raw Image Size: {}",
            dimensions(
                &record.text("raw_image_width"),
                &record.text("raw_image_height")
            )
        ),
        String::new(),
        format!("Progress: {}%", record.text("progress")),
        String::new(),
    ];

    let sub_images = record.list("sub_image_urls");
    if !sub_images.is_empty() {
        lines.push("Sub Images:".to_string());
        lines.extend(numbered_lines(&sub_images));
        lines.push(String::new());
    }

    lines
}
