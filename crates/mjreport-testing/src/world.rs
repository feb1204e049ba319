//! Isolated environment for running the `mjreport` binary.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use mjreport_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let input = world.copy_sample("imagine_success.json").unwrap();
/// let result = world
///     .run(&["format", "imagine", input.to_str().unwrap()])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut env_vars = HashMap::new();
        env_vars.insert("NO_COLOR".to_string(), "1".to_string());

        Self {
            temp_dir,
            env_vars,
            samples: SampleFiles::new(),
        }
    }

    pub fn without_env(mut self, key: &str) -> Self {
        self.env_vars.remove(key);
        self
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to a file in the temp directory and return its path.
    pub fn write_input(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Copy a sample file into the temp directory and return its path.
    pub fn copy_sample(&self, sample_name: &str) -> Result<PathBuf> {
        let dest = self.root().join(sample_name);
        self.samples.copy_to(sample_name, &dest)?;
        Ok(dest)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.root());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute the binary with `args`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute the binary with `args`, feeding `stdin`.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("mjreport")
            .map_err(|e| anyhow::anyhow!("Failed to find mjreport binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
