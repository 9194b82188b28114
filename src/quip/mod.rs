//! Quips: loading them and shaping one into an overlay block.

pub mod format;
pub mod source;

pub use format::{format_quip, wrap, Align};
pub use source::{choose_quip, load_quips, normalize_piped, parse_quips, read_piped_quip};
