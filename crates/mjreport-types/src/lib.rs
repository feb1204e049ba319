pub mod error;
pub mod record;
mod value;

pub use error::{Error, Result};
pub use record::{NOT_AVAILABLE, Record};
pub use value::{is_truthy_value, render_value};
