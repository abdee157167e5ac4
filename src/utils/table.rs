//! Table rendering utilities for CLI outputs.
//!
//! Column widths are measured on the visible text (ANSI sequences removed,
//! wide glyphs counted by `unicode-width`).

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}
