//! The jestsay pipeline: load art, pick a quip, stamp it, render.

use std::fs;
use std::io;
use std::path::Path;

use crate::art::{AnsiImage, Overlay};
use crate::config::Settings;
use crate::error::JestsayError;
use crate::quip::{self, format_quip};

/// Read and parse an art file.
pub fn load_image(path: &Path) -> Result<AnsiImage, JestsayError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => JestsayError::ArtNotFound {
            path: path.to_path_buf(),
        },
        _ => JestsayError::ArtUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(AnsiImage::from_bytes(&bytes))
}

/// Clamp the requested offsets so a `block_width` x `block_height` block
/// stays inside the image. A block bigger than the image is pinned to 0.
pub fn place_block(
    image: &AnsiImage,
    settings: &Settings,
    block_width: usize,
    block_height: usize,
) -> Overlay {
    let clamp = |offset: i64, image_len: usize, block_len: usize| -> usize {
        let max = image_len as i64 - block_len as i64;
        offset.min(max).max(0) as usize
    };

    Overlay::new(
        clamp(settings.x_offset, image.width(), block_width),
        clamp(settings.y_offset, image.height(), block_height),
        settings.color,
        settings.bold,
    )
}

/// Stamp `quip` onto `image` and render the result.
pub fn render_quip(mut image: AnsiImage, settings: &Settings, quip: &str) -> String {
    let block = format_quip(quip, settings.width, settings.height, settings.align);
    let block_width = block
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let overlay = place_block(&image, settings, block_width, block.len());
    tracing::debug!(
        x = overlay.x_offset,
        y = overlay.y_offset,
        lines = block.len(),
        "placing quip"
    );
    image.overlay(&overlay, &block);
    image.render()
}

/// Run one invocation with already-resolved settings.
///
/// The art file is read before the quips so a missing image is reported
/// first. `piped` is a quip read from stdin, if any.
pub fn run(settings: &Settings, piped: Option<String>) -> Result<String, JestsayError> {
    let image = load_image(&settings.jester)?;
    let quips = quip::load_quips(&settings.quips)?;
    let quip = quip::choose_quip(piped, &quips).ok_or(JestsayError::NoQuips)?;
    Ok(render_quip(image, settings, &quip))
}
