// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned tables for the step and attempt views.
//!
//! Widths are counted in characters and computed from the data. Color is
//! applied after padding so escape codes never count toward a width.

use std::io::{self, Write};

use crate::color::{self, Tone};

const SEP: &str = "  ";

pub enum Align {
    Left,
    Right,
}

/// Styling of body cells. Headers always use [`Tone::Header`].
pub enum CellStyle {
    Plain,
    Muted,
    /// Colored by outcome, see [`color::status`].
    Status,
}

pub struct Column {
    pub name: &'static str,
    pub align: Align,
    pub style: CellStyle,
    /// Longer values are cut to this many characters.
    pub max_width: Option<usize>,
}

impl Column {
    fn new(name: &'static str, align: Align, style: CellStyle) -> Self {
        Self {
            name,
            align,
            style,
            max_width: None,
        }
    }

    pub fn left(name: &'static str) -> Self {
        Self::new(name, Align::Left, CellStyle::Plain)
    }

    pub fn right(name: &'static str) -> Self {
        Self::new(name, Align::Right, CellStyle::Plain)
    }

    /// Right-aligned and greyed out.
    pub fn muted(name: &'static str) -> Self {
        Self::new(name, Align::Right, CellStyle::Muted)
    }

    pub fn status(name: &'static str) -> Self {
        Self::new(name, Align::Left, CellStyle::Status)
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }

    /// Cut `text` to the column's maximum width on a char boundary.
    fn clip<'a>(&self, text: &'a str) -> &'a str {
        match self.max_width.and_then(|max| text.char_indices().nth(max)) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    /// A trailing left-aligned column is left unpadded.
    fn pad(&self, text: &str, width: usize, trailing: bool) -> String {
        match self.align {
            Align::Left if trailing => text.to_string(),
            Align::Left => format!("{text:<width$}"),
            Align::Right => format!("{text:>width$}"),
        }
    }

    fn paint(&self, padded: String, colorize: bool) -> String {
        if !colorize {
            return padded;
        }
        match self.style {
            CellStyle::Plain => padded,
            CellStyle::Muted => Tone::Muted.paint(&padded),
            CellStyle::Status => color::status(&padded, true),
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
        }
    }

    /// Append a row. Missing trailing cells render empty.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Write the header and all rows. A table without rows writes nothing.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.widths();
        let last = self.columns.len().saturating_sub(1);

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let padded = col.pad(col.name, widths[i], i == last);
                if self.colorize {
                    Tone::Header.paint(&padded)
                } else {
                    padded
                }
            })
            .collect();
        writeln!(out, "{}", header.join(SEP))?;

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let text = col.clip(cell_at(row, i));
                    col.paint(col.pad(text, widths[i], i == last), self.colorize)
                })
                .collect();
            writeln!(out, "{}", cells.join(SEP))?;
        }
        Ok(())
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| col.clip(cell_at(row, i)).chars().count())
                    .fold(col.name.chars().count(), usize::max)
            })
            .collect()
    }
}

fn cell_at(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
