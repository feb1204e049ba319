use mjreport_types::Record;

use super::failure::format_error;
use super::imagine::image_lines;
use crate::Category;

/// Report for an image edit response. Same layout as imagine, without actions.
pub fn format_edit_result(record: &Record) -> String {
    if Category::Edit.is_failure(record) {
        return format_error(record);
    }

    image_lines(record).join("\n")
}
