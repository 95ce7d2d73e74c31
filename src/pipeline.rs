//! File pipeline: read the color list, skip blanks, convert each entry.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::converter::hex_to_rgb;
use crate::types::Rgb;

/// Location of the color list, relative to the working directory
pub fn default_palette_path() -> PathBuf {
    PathBuf::from("allowed_colors.txt")
}

/// Read hex color codes from `path` and convert them to RGB entries.
///
/// Blank and whitespace-only lines are skipped; entry order follows file
/// order. The first malformed entry aborts the run with its conversion
/// error, so a failure never yields a partial palette.
pub fn collect_colors(path: &Path) -> Result<Vec<Rgb>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read color list at {}", path.display()))?;

    let mut colors = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let rgb = hex_to_rgb(line)?;
        debug!(color = %rgb, "converted palette entry");
        colors.push(rgb);
    }

    Ok(colors)
}
