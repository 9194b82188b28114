//! Parsed ANSI art image.
//!
//! Splits art content into lines and turns each line into a row of styled
//! cells. The source lines are kept alongside the grid so rows that are
//! never painted can be written back byte-for-byte.

use std::collections::BTreeSet;

use super::sgr::{self, CSI};
use super::types::{Cell, Style};

/// An ANSI art image as a grid of cells plus its original source lines.
#[derive(Debug, Clone, Default)]
pub struct AnsiImage {
    /// Every source line, split on `\n`.
    lines: Vec<String>,
    /// Rows of cells for the lines that produced at least one cell.
    rows: Vec<Vec<Cell>>,
    /// Source line index for each entry in `rows`.
    row_lines: Vec<usize>,
    /// Grid rows touched by an overlay.
    modified: BTreeSet<usize>,
    width: usize,
}

impl AnsiImage {
    /// Parse raw art file bytes. Invalid UTF-8 is replaced, never rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Parse art content into a grid.
    ///
    /// Lines that yield no visible characters (empty or escape-only) get no
    /// grid row but are still kept for output.
    pub fn parse(content: &str) -> Self {
        let mut image = Self::default();

        for (index, line) in content.split('\n').enumerate() {
            let row = parse_line(line);
            if !row.is_empty() {
                image.width = image.width.max(row.len());
                image.rows.push(row);
                image.row_lines.push(index);
            }
            image.lines.push(line.to_string());
        }

        tracing::debug!(
            lines = image.lines.len(),
            width = image.width,
            height = image.height(),
            "parsed ansi art"
        );
        image
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of grid rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y)?.get(x)
    }

    /// The unmodified source line behind grid row `y`.
    pub fn original_line(&self, y: usize) -> Option<&str> {
        let index = *self.row_lines.get(y)?;
        self.lines.get(index).map(String::as_str)
    }

    /// Every source line, including ones that produced no grid row.
    pub fn source_lines(&self) -> &[String] {
        &self.lines
    }

    /// Source line index backing grid row `y`.
    pub(crate) fn source_index(&self, y: usize) -> Option<usize> {
        self.row_lines.get(y).copied()
    }

    pub fn is_modified(&self, y: usize) -> bool {
        self.modified.contains(&y)
    }

    pub fn modified_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.modified.iter().copied()
    }

    pub(crate) fn mark_modified(&mut self, y: usize) {
        self.modified.insert(y);
    }

    /// Swap the cell at `(x, y)` for `cell`.
    ///
    /// Returns false, leaving the grid untouched, when the position is
    /// outside the row.
    pub(crate) fn replace_cell(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }
}

/// Parse a single line into cells. Style never carries over between lines.
fn parse_line(line: &str) -> Vec<Cell> {
    let mut row = Vec::new();
    let mut style = Style::default();
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if rest.starts_with(CSI) {
            // An unterminated sequence swallows the rest of the line.
            let end = rest.find('m').map_or(rest.len(), |m| m + 1);
            let (token, tail) = rest.split_at(end);
            sgr::decode(token).apply(&mut style);
            rest = tail;
        } else {
            row.push(Cell::new(ch, style));
            rest = &rest[ch.len_utf8()..];
        }
    }

    row
}
