//! HTML renderers for the rotated events table.
//!
//! Both strategies draw the same layout: one header column with the row
//! names, one column per event, the `timestamp` row in header cells. They
//! differ only in what a data cell contains.

use askama::Template;

use bridgeview_app::ports::{RenderError, RenderStyle, TableRenderer};
use bridgeview_domain::rotation::RotatedTable;

/// One row of the rotated table, ready for a template.
struct RowView {
    name: String,
    /// Rendered with header emphasis.
    header: bool,
    cells: Vec<CellView>,
}

struct CellView {
    text: String,
    /// Link to the detail page for this cell.
    href: String,
}

/// Path of the detail page for the cell at `row` in `event_id`'s column.
///
/// The row name travels with the index so the page still opens the same
/// field after rows shift.
#[must_use]
pub fn detail_href(event_id: &str, row: usize, field: &str) -> String {
    format!(
        "/events/detail?event={}&row={row}&field={}",
        urlencoding::encode(event_id),
        urlencoding::encode(field)
    )
}

fn rows(table: &RotatedTable) -> Vec<RowView> {
    table
        .row_names
        .iter()
        .zip(&table.cells)
        .enumerate()
        .map(|(index, (name, cells))| RowView {
            name: name.clone(),
            header: index == 0,
            cells: cells
                .iter()
                .zip(&table.column_names)
                .map(|(text, column)| CellView {
                    text: text.clone(),
                    href: detail_href(column, index, name),
                })
                .collect(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "plain_table.html")]
struct PlainTableTemplate<'a> {
    columns: &'a [String],
    rows: Vec<RowView>,
}

#[derive(Template)]
#[template(path = "interactive_grid.html")]
struct InteractiveGridTemplate<'a> {
    columns: &'a [String],
    rows: Vec<RowView>,
}

/// Static table without interaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTable;

impl TableRenderer for PlainTable {
    fn render(&self, table: &RotatedTable) -> Result<String, RenderError> {
        PlainTableTemplate {
            columns: &table.column_names,
            rows: rows(table),
        }
        .render()
        .map_err(|err| RenderError(Box::new(err)))
    }
}

/// Grid whose data cells link to an on-demand detail page.
///
/// Empty cells and the `timestamp` header row carry no link: there is
/// nothing to inspect in them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveGrid;

impl TableRenderer for InteractiveGrid {
    fn render(&self, table: &RotatedTable) -> Result<String, RenderError> {
        InteractiveGridTemplate {
            columns: &table.column_names,
            rows: rows(table),
        }
        .render()
        .map_err(|err| RenderError(Box::new(err)))
    }
}

/// The renderer implementing `style`.
#[must_use]
pub fn renderer_for(style: RenderStyle) -> &'static dyn TableRenderer {
    match style {
        RenderStyle::Plain => &PlainTable,
        RenderStyle::Interactive => &InteractiveGrid,
    }
}
