//! Command-line interface definition.
//!
//! Kept in the library so the xtask crate can render the man page from the
//! same definition.

use std::path::PathBuf;

use clap::Parser;

use crate::quip::Align;

/// Version string with build metadata from build.rs.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("JESTSAY_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("JESTSAY_BUILD_DATE"),
    ")"
);

/// Overlay witty quips onto ANSI art images.
///
/// Unset options fall back to the config file, then to built-in defaults.
/// Text piped on stdin is used as the quip instead of a random one.
#[derive(Debug, Parser)]
#[command(name = "jestsay", version = VERSION)]
#[command(after_help = "\
Examples:
  jestsay                          # Use defaults
  jestsay --align left --color '#FF5733'
  jestsay --x-offset 20 --y-offset 5 --width 40
  fortune | jestsay                # Quip from stdin")]
pub struct Cli {
    /// Path to config file [default: ~/.config/jestsay/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to ANSI art file [default: ~/.local/share/jestsay/pixpop_bubble_short.ans]
    #[arg(long, value_name = "PATH")]
    pub jester: Option<PathBuf>,

    /// Path(s) to quips file(s) [default: ~/.local/share/jestsay/quips.txt]
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub quips: Vec<PathBuf>,

    /// Horizontal position for text start [default: 23]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub x_offset: Option<i64>,

    /// Vertical position for text start [default: 8]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub y_offset: Option<i64>,

    /// Width of text area [default: 33]
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// Number of text lines [default: 3]
    #[arg(long, value_name = "N")]
    pub height: Option<usize>,

    /// Text alignment [default: center]
    #[arg(long, value_enum)]
    pub align: Option<Align>,

    /// Text color as hex code [default: #775A95]
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Disable bold text (bold is on by default)
    #[arg(long)]
    pub no_bold: bool,
}
