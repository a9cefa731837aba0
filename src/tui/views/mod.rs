//! Module renderers for the dashboard.

mod cases;
mod scenario;
mod workflow;

pub use cases::render_cases;
pub use scenario::render_scenario;
pub use workflow::render_workflow;

use crate::tui::theme::Styles;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};

/// Bordered table with the shared header style.
pub(crate) fn styled_table<'a>(
    title: &'a str,
    header: &'a [&'a str],
    rows: Vec<Row<'a>>,
    widths: &'a [Constraint],
) -> Table<'a> {
    Table::new(rows, widths.iter().copied())
        .header(Row::new(header.iter().copied()).style(Styles::table_header()))
        .column_spacing(1)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
}

/// Bordered block with a section title.
pub(crate) fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
}
