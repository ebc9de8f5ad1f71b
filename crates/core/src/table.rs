//! Markdown serialization of externally extracted table grids.

use crate::types::TableGrid;

/// Render a cell-string grid as a Markdown table.
///
/// The first row is the header. Returns `None` for grids that carry no
/// information: an empty grid, a header row with no cells, or a header with
/// no data rows under it. Data rows are truncated and padded to the header's
/// column count, and embedded line breaks inside data cells become single
/// spaces.
pub fn render_table(grid: &TableGrid) -> Option<String> {
    let header = grid.first()?;
    if header.is_empty() || grid.len() < 2 {
        return None;
    }

    let mut lines = Vec::with_capacity(grid.len() + 1);
    lines.push(render_row(header.iter().map(cell_text)));
    lines.push(render_row(header.iter().map(|_| "---".to_string())));

    for row in &grid[1..] {
        let cells = (0..header.len()).map(|i| {
            row.get(i)
                .map_or_else(String::new, |cell| cell_text(cell).replace('\n', " "))
        });
        lines.push(render_row(cells));
    }

    Some(lines.join("\n"))
}

fn cell_text(cell: &Option<String>) -> String {
    cell.clone().unwrap_or_default()
}

fn render_row(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
