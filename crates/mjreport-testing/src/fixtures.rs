//! Sample response records.
//!
//! On-disk samples live in `crates/mjreport-testing/samples/` and mirror
//! what the upstream API client hands to the formatters. The builders below
//! cover the small edge-case records that are easier to read inline.

use anyhow::{Context, Result};
use mjreport_types::Record;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self {
            samples_dir: manifest_dir.join("samples"),
        }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample {}", path.display()))
    }

    /// Load a sample as a record.
    pub fn load(&self, sample_name: &str) -> Result<Record> {
        let content = self.read(sample_name)?;
        Record::from_json_str(&content)
            .with_context(|| format!("Sample {} is not a valid record", sample_name))
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        fs::copy(self.path(sample_name), dest)?;
        Ok(())
    }
}

/// Build a record from a `json!` literal. Panics on non-objects.
pub fn record(value: Value) -> Record {
    Record::try_from(value).expect("fixture must be a JSON object")
}

/// A generation response (imagine/video/edit style) that failed upstream.
pub fn failed_generation(code: &str, message: &str) -> Record {
    record(json!({
        "success": false,
        "error": {"code": code, "message": message}
    }))
}

/// A query response (describe/translate/task style) carrying an `error` key.
pub fn error_response(code: &str, message: &str) -> Record {
    record(json!({
        "error": {"code": code, "message": message}
    }))
}

/// A task query whose nested response is the given value.
pub fn task_with_response(response: Value) -> Record {
    record(json!({
        "id": "task-1",
        "type": "imagine",
        "created_at": "2026-10-01T08:00:00.000Z",
        "finished_at": "2026-10-01T08:01:00.000Z",
        "request": {"action": "generate", "prompt": "a lighthouse", "mode": "fast"},
        "response": response
    }))
}
