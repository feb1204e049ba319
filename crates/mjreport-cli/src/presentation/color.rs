use crate::types::{ColorChoice, OutputFormat};
use is_terminal::IsTerminal;

/// Decide whether terminal styling is applied.
///
/// JSON output is never styled. `auto` styles only when stdout is a terminal
/// and `NO_COLOR` is unset.
pub fn resolve_color(choice: ColorChoice, format: OutputFormat) -> bool {
    if format == OutputFormat::Json {
        return false;
    }

    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

/// Decide whether `Warning:` lines on stderr are styled.
///
/// Independent of `--format`, since warnings are never part of JSON output.
/// `auto` styles only when stderr is a terminal and `NO_COLOR` is unset.
pub fn resolve_warning_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        }
    }
}
