pub mod color;
pub mod console;

pub use color::{resolve_color, resolve_warning_color};
pub use console::{CategoryRow, ConsoleRenderer};
