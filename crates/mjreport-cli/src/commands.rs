use super::args::{Cli, Commands};
use super::handlers;
use crate::presentation::{ConsoleRenderer, resolve_color, resolve_warning_color};
use anyhow::Result;

/// How the process should exit once a command has finished without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// `--strict` was given and at least one response reported a failure
    UpstreamFailure,
}

impl RunStatus {
    pub fn code(&self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::UpstreamFailure => 2,
        }
    }
}

pub fn run(cli: Cli) -> Result<RunStatus> {
    let renderer = ConsoleRenderer::new(cli.format, resolve_color(cli.color, cli.format))
        .with_warning_color(resolve_warning_color(cli.color));

    match cli.command {
        Commands::Format {
            category,
            input,
            lines,
            strict,
        } => handlers::format::handle(
            &renderer,
            category.into(),
            input.as_deref(),
            handlers::format::FormatOptions { lines, strict },
        ),

        Commands::Categories => {
            handlers::categories::handle(&renderer)?;
            Ok(RunStatus::Success)
        }
    }
}
