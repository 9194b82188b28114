//! Serializing an image back to ANSI text.
//!
//! Untouched lines are copied from the source verbatim. Modified rows are
//! re-encoded from their cells, emitting a sequence only where the style
//! changes and always closing with a reset.

use super::image::AnsiImage;
use super::sgr;
use super::types::{Cell, Style};

impl AnsiImage {
    /// Render the image, joining lines with `\n` exactly as they were split.
    pub fn render(&self) -> String {
        let mut encoded = vec![None; self.source_lines().len()];
        for y in self.modified_rows() {
            if let (Some(index), Some(row)) = (self.source_index(y), self.row(y)) {
                encoded[index] = Some(encode_row(row));
            }
        }

        let lines: Vec<&str> = self
            .source_lines()
            .iter()
            .zip(&encoded)
            .map(|(original, fresh)| fresh.as_deref().unwrap_or(original.as_str()))
            .collect();
        lines.join("\n")
    }
}

/// Encode one row of cells with minimal style changes.
pub fn encode_row(row: &[Cell]) -> String {
    let mut buf = String::with_capacity(row.len() * 2);
    let mut last = Style::default();

    for cell in row {
        if cell.style != last {
            sgr::encode(&cell.style, &mut buf);
            last = cell.style;
        }
        buf.push(cell.ch);
    }

    sgr::encode(&Style::default(), &mut buf);
    buf
}
