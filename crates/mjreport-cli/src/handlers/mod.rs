pub mod categories;
pub mod format;
