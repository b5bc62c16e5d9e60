//! Formatting functions for displaying tables as ASCII grids.

use polars::prelude::*;

use crate::query::AggregateResult;

/// Render a full table: header row = column names, one line per row,
/// `+---+` borders around everything.
pub fn data_table(df: &DataFrame) -> String {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let columns: Vec<&Series> = df
        .get_columns()
        .iter()
        .map(|c| c.as_materialized_series())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let cells = columns.iter().map(|series| format_cell(series, i)).collect();
        rows.push(cells);
    }

    grid(&headers, &rows)
}

/// Render the single-row aggregation summary.
pub fn aggregate_table(result: &AggregateResult) -> String {
    let headers = vec![
        "column".to_string(),
        "function".to_string(),
        "result".to_string(),
    ];
    let row = vec![
        result.column.clone(),
        result.func.name().to_string(),
        result.value.to_string(),
    ];
    grid(&headers, &[row])
}

fn format_cell(series: &Series, row: usize) -> String {
    series
        .get(row)
        .ok()
        .map(|value| {
            if value.is_null() {
                String::new()
            } else {
                value.to_string().trim_matches('"').to_string()
            }
        })
        .unwrap_or_default()
}

/// Column widths sized to the widest cell, header included.
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }
    widths
}

fn draw_border(widths: &[usize]) -> String {
    let mut border = String::from("+");
    for width in widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border.push('\n');
    border
}

fn draw_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(&format!("{:<width$}", cell, width = width));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let border = draw_border(&widths);

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&draw_row(headers, &widths));
    out.push_str(&border);
    for row in rows {
        out.push_str(&draw_row(row, &widths));
        out.push_str(&border);
    }
    out
}
