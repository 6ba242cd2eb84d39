//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured on the visible text: cells may carry ANSI colors.

use crate::utils::formatting::{pad_left, pad_right};
use regex::Regex;
use std::sync::OnceLock;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right: bool,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right: false,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: Option<char>,
}

pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: None,
        }
    }

    /// Draw a rule of `c` under the header.
    pub fn with_separator(mut self, c: char) -> Self {
        self.separator = Some(c);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_cell(col: &Column, value: &str) -> String {
        let visible = strip_ansi(value);
        let padded = if col.right {
            pad_left(&visible, col.width)
        } else {
            pad_right(&visible, col.width)
        };
        // re-apply the original (colored) text inside the padding
        padded.replacen(&visible, value, 1)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::render_cell(col, &col.header));
            out.push(' ');
        }
        out.push('\n');

        if let Some(c) = self.separator {
            let width: usize = self.columns.iter().map(|c| c.width + 1).sum();
            out.push_str(&c.to_string().repeat(width));
            out.push('\n');
        }

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&Self::render_cell(col, value));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
