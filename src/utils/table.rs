//! Table rendering utilities for CLI outputs.

use super::formatting::{display_width, pad_right, truncate};
use ansi_term::Style;

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        let row = row
            .into_iter()
            .zip(&self.columns)
            .map(|(cell, col)| truncate(&single_line(&cell), col.max_width))
            .collect();
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .chain(std::iter::once(display_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_with(|_| None)
    }

    /// Render, painting row `i` (0-based, header excluded) with `style(i)`.
    pub fn render_with<F>(&self, style: F) -> String
    where
        F: Fn(usize) -> Option<Style>,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (i, row) in self.rows.iter().enumerate() {
            let mut line = String::new();
            for (cell, w) in row.iter().zip(&widths) {
                line.push_str(&pad_right(cell, *w));
                line.push(' ');
            }
            match style(i) {
                Some(st) => out.push_str(&st.paint(line).to_string()),
                None => out.push_str(&line),
            }
            out.push('\n');
        }

        out
    }
}

/// Cells are printed on one line: embedded line breaks become spaces.
fn single_line(cell: &str) -> String {
    cell.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
