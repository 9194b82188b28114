//! Configuration file and default locations.
//!
//! Settings are resolved in three layers: command line, then the TOML config
//! file, then built-in defaults. Paths follow the XDG base directory layout
//! on every platform, as the bundled art and quips are installed there.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::art::Rgb;
use crate::cli::Cli;
use crate::error::JestsayError;
use crate::quip::Align;

pub const DEFAULT_X_OFFSET: i64 = 23;
pub const DEFAULT_Y_OFFSET: i64 = 8;
pub const DEFAULT_WIDTH: usize = 33;
pub const DEFAULT_HEIGHT: usize = 3;
pub const DEFAULT_COLOR: &str = "#775A95";

const APP_DIR: &str = "jestsay";
const DEFAULT_JESTER_FILE: &str = "pixpop_bubble_short.ans";
const DEFAULT_QUIPS_FILE: &str = "quips.txt";
const CONFIG_FILE: &str = "config.toml";

/// One path or a list of paths (`quips = "a.txt"` or `quips = ["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathList {
    pub fn into_vec(self) -> Vec<PathBuf> {
        match self {
            Self::One(path) => vec![path],
            Self::Many(paths) => paths,
        }
    }
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub jester: Option<PathBuf>,
    pub quips: Option<PathList>,
    pub x_offset: Option<i64>,
    pub y_offset: Option<i64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub align: Option<Align>,
    pub color: Option<String>,
    pub no_bold: Option<bool>,
}

impl Config {
    /// Default config path: `$XDG_CONFIG_HOME/jestsay/config.toml`.
    pub fn config_path() -> PathBuf {
        config_home().join(APP_DIR).join(CONFIG_FILE)
    }

    /// Parse config file content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the config, falling back to defaults on any problem.
    ///
    /// `explicit` is used when it names an existing file, otherwise the
    /// default location is tried. A broken file is reported and ignored.
    pub fn load(explicit: Option<&Path>) -> Self {
        let Some(path) = find_config(explicit) else {
            tracing::info!("config file not found, using defaults");
            return Self::default();
        };

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("failed to load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn find_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| p.is_file()) {
        return Some(path.to_path_buf());
    }
    let default = Config::config_path();
    default.is_file().then_some(default)
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub jester: PathBuf,
    pub quips: Vec<PathBuf>,
    pub x_offset: i64,
    pub y_offset: i64,
    pub width: usize,
    pub height: usize,
    pub align: Align,
    pub color: Rgb,
    pub bold: bool,
}

impl Settings {
    /// Layer command-line values over the config file over defaults.
    ///
    /// Fails only when the chosen color string is not a valid hex color.
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self, JestsayError> {
        let color = cli
            .color
            .clone()
            .or(config.color)
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());

        let quips = if cli.quips.is_empty() {
            config
                .quips
                .map(PathList::into_vec)
                .unwrap_or_else(|| vec![default_quips_path()])
        } else {
            cli.quips.clone()
        };

        Ok(Self {
            jester: cli
                .jester
                .clone()
                .or(config.jester)
                .unwrap_or_else(default_jester_path),
            quips,
            x_offset: cli.x_offset.or(config.x_offset).unwrap_or(DEFAULT_X_OFFSET),
            y_offset: cli.y_offset.or(config.y_offset).unwrap_or(DEFAULT_Y_OFFSET),
            width: cli.width.or(config.width).unwrap_or(DEFAULT_WIDTH),
            height: cli.height.or(config.height).unwrap_or(DEFAULT_HEIGHT),
            align: cli.align.or(config.align).unwrap_or_default(),
            color: color.parse()?,
            bold: !(cli.no_bold || config.no_bold.unwrap_or(false)),
        })
    }
}

/// `$XDG_DATA_HOME/jestsay/pixpop_bubble_short.ans`
pub fn default_jester_path() -> PathBuf {
    data_home().join(APP_DIR).join(DEFAULT_JESTER_FILE)
}

/// `$XDG_DATA_HOME/jestsay/quips.txt`
pub fn default_quips_path() -> PathBuf {
    data_home().join(APP_DIR).join(DEFAULT_QUIPS_FILE)
}

fn data_home() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn config_home() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var_os(var) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let mut dir = dirs::home_dir().unwrap_or_default();
            dir.extend(fallback);
            dir
        }
    }
}
