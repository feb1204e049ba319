use crate::presentation::{CategoryRow, ConsoleRenderer};
use anyhow::Result;
use mjreport_core::Category;

pub fn handle(renderer: &ConsoleRenderer) -> Result<()> {
    let rows: Vec<CategoryRow> = Category::ALL.into_iter().map(CategoryRow::from).collect();
    renderer.render_categories(&rows)
}
