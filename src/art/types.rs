//! ANSI art data types.
//!
//! Contains the core data structures for representing parsed art:
//! - Rgb: a true-color triple
//! - Style: foreground, background and bold resolved for one cell
//! - Cell: a single character with its style

/// A true-color value.
///
/// Components are normally 0-255, but art files are not range-checked and
/// whatever decimal they carry is passed through to the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Rgb {
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }
}

/// Resolved text attributes for a cell.
///
/// `None` colors mean "terminal default". The default style is
/// "no color, not bold", which is also what every line starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    /// True for the "no color, not bold" style, which renders as a bare reset.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold
    }
}

/// A single character cell in the art grid.
///
/// Cells are values: an overlay replaces the whole cell rather than
/// patching individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    pub fn fg(&self) -> Option<Rgb> {
        self.style.fg
    }

    pub fn bg(&self) -> Option<Rgb> {
        self.style.bg
    }

    pub fn bold(&self) -> bool {
        self.style.bold
    }
}
