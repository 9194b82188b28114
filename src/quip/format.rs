//! Shaping a quip into a fixed-size text block.
//!
//! Widths are counted in `char`s, matching the one-cell-per-char grid.

use std::borrow::Cow;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use textwrap::{Options, WordSeparator, WrapAlgorithm};

const TAB_STOP: usize = 8;

/// Horizontal alignment of each line inside the block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Wrap, trim and align `quip` into exactly `height` lines of `width` chars.
pub fn format_quip(quip: &str, width: usize, height: usize, align: Align) -> Vec<String> {
    let mut lines = wrap(quip, width);
    lines.truncate(height);
    lines.resize(height, String::new());

    lines
        .iter()
        .map(|line| {
            let aligned = pad(line, width, align);
            aligned.chars().take(width).collect()
        })
        .collect()
}

/// Greedy word wrap that never splits a word.
///
/// Tabs are expanded to 8-column stops first. Lines break at spaces and
/// after hyphens inside words; whitespace runs inside a line are kept as
/// written. A word longer than `width` gets a line to itself.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let text = expand_tabs(text);
    if text.trim().is_empty() {
        return Vec::new();
    }

    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(&text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Replace each tab with spaces up to the next multiple of `TAB_STOP`.
fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let fill = TAB_STOP - column % TAB_STOP;
                out.extend(std::iter::repeat(' ').take(fill));
                column += fill;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

fn pad(line: &str, width: usize, align: Align) -> String {
    let len = line.chars().count();
    let margin = width.saturating_sub(len);
    let left = match align {
        Align::Left => 0,
        Align::Right => margin,
        // Odd margins put the extra column on the left only when the
        // target width is odd too.
        Align::Center => margin / 2 + (margin & width & 1),
    };
    format!(
        "{}{}{}",
        " ".repeat(left),
        line,
        " ".repeat(margin - left)
    )
}
