use mjreport_types::Record;
use serde::Serialize;

use crate::{Category, format};

/// A rendered report together with what produced it, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub category: Category,
    pub failed: bool,
    pub text: String,
}

impl Report {
    pub fn build(category: Category, record: &Record) -> Self {
        Self {
            category,
            failed: category.is_failure(record),
            text: format(category, record),
        }
    }
}
