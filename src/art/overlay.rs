//! Stamping text onto an image.

use super::image::AnsiImage;
use super::types::{Cell, Rgb, Style};

/// Placement and style for a block of overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    /// Column of the block's first character.
    pub x_offset: usize,
    /// Grid row of the block's first line.
    pub y_offset: usize,
    pub color: Rgb,
    pub bold: bool,
}

impl Overlay {
    pub fn new(x_offset: usize, y_offset: usize, color: Rgb, bold: bool) -> Self {
        Self {
            x_offset,
            y_offset,
            color,
            bold,
        }
    }
}

impl AnsiImage {
    /// Paint `lines` onto the image, keeping each cell's original background.
    ///
    /// Spaces are transparent. Every in-bounds row of the block is marked
    /// modified, even when it paints nothing. Anything past the grid edge
    /// (or past the end of a short row) is clipped.
    pub fn overlay<S: AsRef<str>>(&mut self, overlay: &Overlay, lines: &[S]) {
        for (r, line) in lines.iter().enumerate() {
            let y = overlay.y_offset + r;
            if y >= self.height() {
                break;
            }
            self.mark_modified(y);

            for (c, ch) in line.as_ref().chars().enumerate() {
                let x = overlay.x_offset + c;
                if x >= self.width() {
                    break;
                }
                if ch == ' ' {
                    continue;
                }
                let Some(existing) = self.cell(x, y) else {
                    break;
                };
                let style = Style {
                    fg: Some(overlay.color),
                    bg: existing.bg(),
                    bold: overlay.bold,
                };
                self.replace_cell(x, y, Cell::new(ch, style));
            }
        }
    }
}
