use mjreport_types::Record;

use super::failure::format_error;
use super::text::{dimensions, numbered_lines};
use crate::Category;

pub fn format_video_result(record: &Record) -> String {
    if Category::Video.is_failure(record) {
        return format_error(record);
    }

    let mut lines = vec![
        format!("Task ID: {}", record.text("task_id")),
        format!("Video ID: {}", record.text("video_id")),
        String::new(),
        format!("Cover Image: {}", record.text("image_url")),
        format!(
            "Cover Size: {}",
            dimensions(&record.text("image_width"), &record.text("image_height"))
        ),
        String::new(),
        format!("Progress: {}%", record.text("progress")),
        String::new(),
    ];

    let video_urls = record.list("video_urls");
    if !video_urls.is_empty() {
        lines.push("Video URLs:".to_string());
        lines.extend(numbered_lines(&video_urls));
        lines.push(String::new());
    }

    lines.join("\n")
}
