//! True-color ANSI art engine.
//!
//! Parses art files into a grid of styled cells, stamps overlay text onto
//! the grid, and renders it back to escape sequences. Only SGR sequences
//! with RGB colors and bold are understood; anything else is passed
//! through untouched on unpainted lines and ignored on painted ones.
//!
//! # Module Structure
//!
//! - [`types`] - Rgb, Style and Cell values
//! - [`sgr`] - Escape sequence decoding and encoding
//! - [`image`] - Line parsing and the cell grid
//! - [`overlay`] - Painting text onto the grid
//! - [`render`] - Serializing the grid

pub mod image;
pub mod overlay;
pub mod render;
pub mod sgr;
pub mod types;

pub use image::AnsiImage;
pub use overlay::Overlay;
pub use sgr::{ChannelUpdate, SgrDelta};
pub use types::{Cell, Rgb, Style};
