//! Where quips come from: quip files and piped stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use rand::seq::SliceRandom;

use crate::error::JestsayError;

/// Parse quip file content: one quip per line, `#` starts a comment line.
pub fn parse_quips(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load and concatenate quips from every file, in order.
///
/// Returns `NoQuips` when the files hold nothing usable.
pub fn load_quips<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, JestsayError> {
    let mut quips = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => JestsayError::QuipsNotFound {
                path: path.to_path_buf(),
            },
            _ => JestsayError::QuipsUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let parsed = parse_quips(&content);
        tracing::debug!(path = %path.display(), count = parsed.len(), "loaded quips");
        quips.extend(parsed);
    }

    if quips.is_empty() {
        return Err(JestsayError::NoQuips);
    }
    Ok(quips)
}

/// Flatten piped input into a single line.
///
/// Every run of line breaks becomes one space. Returns `None` when
/// nothing but whitespace was piped.
pub fn normalize_piped(input: &str) -> Option<String> {
    let joined = input
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Read a quip from stdin when it is a pipe rather than a terminal.
pub fn read_piped_quip() -> io::Result<Option<String>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    Ok(normalize_piped(&input))
}

/// Pick the quip to show: piped text wins, otherwise a random loaded one.
pub fn choose_quip(piped: Option<String>, quips: &[String]) -> Option<String> {
    piped.or_else(|| quips.choose(&mut rand::thread_rng()).cloned())
}
