//! SGR (Select Graphic Rendition) decoder.
//!
//! Handles the CSI m sequences found in true-color art files:
//! - Reset (0)
//! - Bold on/off (1, 22)
//! - RGB foreground/background (38;2;r;g;b, 48;2;r;g;b)
//! - Default foreground/background (39, 49)
//!
//! Everything else is ignored. Malformed color clusters are skipped without
//! error so a damaged art file still renders.

use super::types::{Rgb, Style};

/// Escape sequence introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// What one escape sequence did to a color channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelUpdate {
    /// The sequence did not address this channel.
    #[default]
    Unchanged,
    /// The channel was set to a color.
    Set(Rgb),
    /// The channel was explicitly returned to the terminal default.
    Cleared,
}

impl ChannelUpdate {
    /// Apply the update on top of the current channel value.
    pub fn apply(self, current: Option<Rgb>) -> Option<Rgb> {
        match self {
            Self::Unchanged => current,
            Self::Set(rgb) => Some(rgb),
            Self::Cleared => None,
        }
    }

    pub fn is_explicit(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The style change carried by a single escape sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SgrDelta {
    pub fg: ChannelUpdate,
    pub bg: ChannelUpdate,
    /// `None` when the sequence never mentioned bold.
    pub bold: Option<bool>,
}

impl SgrDelta {
    /// Apply only the channels this sequence addressed.
    pub fn apply(&self, style: &mut Style) {
        style.fg = self.fg.apply(style.fg);
        style.bg = self.bg.apply(style.bg);
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Decode one escape token, from `ESC [` through the final `m`.
///
/// A token that is not introduced by `ESC [` or is not terminated by `m`
/// (an unterminated tail of a line) carries no style information.
pub fn decode(token: &str) -> SgrDelta {
    let mut delta = SgrDelta::default();

    let Some(body) = token
        .strip_prefix(CSI)
        .and_then(|rest| rest.strip_suffix('m'))
    else {
        return delta;
    };

    let codes: Vec<&str> = body.split(';').collect();
    let mut i = 0;
    while i < codes.len() {
        match codes[i] {
            "0" => {
                delta.fg = ChannelUpdate::Cleared;
                delta.bg = ChannelUpdate::Cleared;
                delta.bold = Some(false);
            }
            "1" => delta.bold = Some(true),
            "22" => delta.bold = Some(false),
            "38" => {
                if let Some(rgb) = rgb_cluster(&codes[i + 1..]) {
                    delta.fg = ChannelUpdate::Set(rgb);
                    i += 4;
                }
            }
            "48" => {
                if let Some(rgb) = rgb_cluster(&codes[i + 1..]) {
                    delta.bg = ChannelUpdate::Set(rgb);
                    i += 4;
                }
            }
            "39" => delta.fg = ChannelUpdate::Cleared,
            "49" => delta.bg = ChannelUpdate::Cleared,
            _ => {}
        }
        i += 1;
    }

    delta
}

/// Parse the `2;r;g;b` tail that follows a 38/48 code.
///
/// Components are not range-checked, so `300` is kept as written.
fn rgb_cluster(rest: &[&str]) -> Option<Rgb> {
    match rest {
        ["2", r, g, b, ..] => Some(Rgb::new(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

/// Encode a style as a single escape sequence.
///
/// The plain style becomes a bare reset; anything else always spells out
/// both color channels so the sequence is independent of prior state.
pub fn encode(style: &Style, buf: &mut String) {
    buf.push_str(CSI);
    if style.is_plain() {
        buf.push('0');
    } else {
        if style.bold {
            buf.push_str("1;");
        }
        match style.fg {
            Some(Rgb { r, g, b }) => buf.push_str(&format!("38;2;{};{};{}", r, g, b)),
            None => buf.push_str("39"),
        }
        buf.push(';');
        match style.bg {
            Some(Rgb { r, g, b }) => buf.push_str(&format!("48;2;{};{};{}", r, g, b)),
            None => buf.push_str("49"),
        }
    }
    buf.push('m');
}
