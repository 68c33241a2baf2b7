//! I/O helpers for cover-art tiles and JSON reports.
//!
//! - `load_cover_tile`: read a PNG/JPEG/etc., resize to a square tile and
//!   frame it in black.
//! - `save_rgb_png`: write an `RgbImage8` to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::rgb::{RgbImage8, BLACK};
use image::imageops::{self, FilterType};
use image::ImageBuffer;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a cover image from disk and prepare it as a stacking tile:
/// convert to RGB, resize to `imsize × imsize` and outline the border so
/// plain-colour artwork keeps a visible edge inside a stack.
pub fn load_cover_tile(path: &Path, imsize: usize) -> Result<RgbImage8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let resized = imageops::resize(&img, imsize as u32, imsize as u32, FilterType::Triangle);
    let mut tile = RgbImage8::from_flat(imsize, imsize, resized.as_raw())
        .ok_or_else(|| format!("Unexpected decode buffer size for {}", path.display()))?;
    tile.outline(BLACK);
    Ok(tile)
}

/// Save an RGB buffer to a PNG, creating parent directories.
pub fn save_rgb_png(image: &RgbImage8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out: image::RgbImage =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, image.to_flat())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
