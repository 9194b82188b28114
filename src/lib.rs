//! jestsay - cowsay with a twist.
//!
//! Overlays a quip onto true-color ANSI art while keeping the art's colors
//! intact around the painted glyphs.
//!
//! The heavy lifting lives in [`art`]: the art file is parsed into a grid of
//! styled cells, the quip is stamped onto a rectangle of that grid, and only
//! the touched rows are re-encoded. Every other line is written back exactly
//! as it was read.

pub mod app;
pub mod art;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod quip;

pub use art::{AnsiImage, Cell, Overlay, Rgb, Style};
pub use cli::Cli;
pub use config::{Config, Settings};
pub use error::{ColorError, JestsayError};
