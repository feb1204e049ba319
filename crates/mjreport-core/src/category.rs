use std::fmt;
use std::str::FromStr;

use mjreport_types::Record;
use serde::{Deserialize, Serialize};

/// Response categories, one per upstream API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Imagine,
    Describe,
    Video,
    Translate,
    Task,
    Edit,
}

/// How a category's response signals an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureIndicator {
    /// `success` is absent or falsy
    MissingSuccess,
    /// an `error` key is present
    ErrorKey,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Imagine,
        Category::Describe,
        Category::Video,
        Category::Translate,
        Category::Task,
        Category::Edit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Imagine => "imagine",
            Category::Describe => "describe",
            Category::Video => "video",
            Category::Translate => "translate",
            Category::Task => "task",
            Category::Edit => "edit",
        }
    }

    pub fn failure_indicator(&self) -> FailureIndicator {
        match self {
            Category::Imagine | Category::Video | Category::Edit => {
                FailureIndicator::MissingSuccess
            }
            Category::Describe | Category::Translate | Category::Task => {
                FailureIndicator::ErrorKey
            }
        }
    }

    pub fn is_failure(&self, record: &Record) -> bool {
        self.failure_indicator().is_set(record)
    }
}

impl FailureIndicator {
    pub fn is_set(&self, record: &Record) -> bool {
        match self {
            FailureIndicator::MissingSuccess => !record.is_truthy("success"),
            FailureIndicator::ErrorKey => record.contains("error"),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            FailureIndicator::MissingSuccess => "`success` absent or falsy",
            FailureIndicator::ErrorKey => "`error` key present",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Category::ALL.iter().map(Category::as_str).collect();
        write!(
            f,
            "unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
