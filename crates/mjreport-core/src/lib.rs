//! Text reports for image and video generation API responses.
//!
//! Every formatter is a pure `&Record -> String` transform. Missing fields are
//! rendered as `N/A`, and a response that signals failure collapses into a
//! single `Error: <code> - <message>` line.
//!
//! ```
//! use mjreport_core::{Category, format};
//! use mjreport_types::Record;
//!
//! let record: Record = r#"{"content": "Hello"}"#.parse().unwrap();
//! assert_eq!(
//!     format(Category::Translate, &record),
//!     "Translated Content:\n\nHello"
//! );
//! ```

pub mod category;
pub mod formatters;
pub mod report;

pub use category::{Category, FailureIndicator, ParseCategoryError};
pub use formatters::{
    format_describe_result, format_edit_result, format_imagine_result, format_task_result,
    format_translate_result, format_video_result,
};
pub use report::Report;

use mjreport_types::Record;

/// Render `record` with the formatter for `category`.
pub fn format(category: Category, record: &Record) -> String {
    match category {
        Category::Imagine => format_imagine_result(record),
        Category::Describe => format_describe_result(record),
        Category::Video => format_video_result(record),
        Category::Translate => format_translate_result(record),
        Category::Task => format_task_result(record),
        Category::Edit => format_edit_result(record),
    }
}
