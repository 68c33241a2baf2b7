//! Tiled image stacking for picture-based bar charts.
//!
//! Purpose
//! - Pack a flat, ordered list of equally sized cover tiles into a single
//!   canvas laid out as `n_high` rows of `n_wide` cells.
//!
//! Design
//! - Tiles fill complete rows first; the final row may be short.
//! - Row group 0 lands in the *bottom* band of the canvas and later groups
//!   move upward, so a stack reads like a bar rising from the baseline.
//! - With `inv` set, cell `j` of every row maps to column `n_wide - j - 1`,
//!   which keeps a short top row flush against the right edge of its
//!   taller neighbour when stacks sit side by side.
//! - Unassigned cells keep the white background.
//!
//! Notes
//! - The layout is validated up front; the canvas is only allocated once
//!   every tile is known to fit, so a failed call writes nothing.
//! - Each cell writes a disjoint region of the canvas.
use crate::raster::{Rgb8, RasterView, RasterViewMut, RgbImage8, WHITE};
use thiserror::Error;

/// Tiling parameters for one stacking call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackLayout {
    /// Tile edge length in pixels; every input must be `imsize × imsize`.
    pub imsize: usize,
    /// Cells per row.
    pub n_wide: usize,
    /// Number of rows in the canvas.
    pub n_high: usize,
    /// Mirror each row to the right edge instead of filling from the left.
    pub inv: bool,
    /// Row-major vertical stacking; the horizontal orientation is not
    /// implemented.
    pub vert: bool,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            imsize: 64,
            n_wide: 5,
            n_high: 1,
            inv: false,
            vert: true,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("horizontal stacking (vert = false) is not implemented")]
    UnsupportedOrientation,
    #[error(
        "stack layout requires positive dimensions (imsize={imsize}, n_wide={n_wide}, n_high={n_high})"
    )]
    DegenerateLayout {
        imsize: usize,
        n_wide: usize,
        n_high: usize,
    },
    #[error("{count} tiles exceed the {n_high}x{n_wide} grid capacity")]
    CapacityExceeded {
        count: usize,
        n_wide: usize,
        n_high: usize,
    },
    #[error("tile {index} is {width}x{height}, expected {imsize}x{imsize}")]
    TileSizeMismatch {
        index: usize,
        width: usize,
        height: usize,
        imsize: usize,
    },
}

/// Stack `tiles` into a white `(n_high * imsize) × (n_wide * imsize)`
/// canvas according to `layout`.
///
/// Tiles are consumed in order, `n_wide` per row; see the module docs for
/// the band mapping. An empty input yields an all-white canvas.
pub fn stack_images<I>(tiles: &[I], layout: &StackLayout) -> Result<RgbImage8, StackError>
where
    I: RasterView<Pixel = Rgb8>,
{
    if !layout.vert {
        return Err(StackError::UnsupportedOrientation);
    }
    if layout.imsize == 0 || layout.n_wide == 0 || layout.n_high == 0 {
        return Err(StackError::DegenerateLayout {
            imsize: layout.imsize,
            n_wide: layout.n_wide,
            n_high: layout.n_high,
        });
    }
    if tiles.len() > layout.n_wide * layout.n_high {
        return Err(StackError::CapacityExceeded {
            count: tiles.len(),
            n_wide: layout.n_wide,
            n_high: layout.n_high,
        });
    }
    for (index, tile) in tiles.iter().enumerate() {
        if tile.width() != layout.imsize || tile.height() != layout.imsize {
            return Err(StackError::TileSizeMismatch {
                index,
                width: tile.width(),
                height: tile.height(),
                imsize: layout.imsize,
            });
        }
    }

    let mut canvas = RgbImage8::filled(
        layout.n_wide * layout.imsize,
        layout.n_high * layout.imsize,
        WHITE,
    );
    for (i, band) in tiles.chunks(layout.n_wide).enumerate() {
        // Group 0 fills the bottom band; later groups grow upward.
        let top = (layout.n_high - i - 1) * layout.imsize;
        for (j, tile) in band.iter().enumerate() {
            let col = if layout.inv { layout.n_wide - j - 1 } else { j };
            let left = col * layout.imsize;
            for (dy, src) in tile.rows().enumerate() {
                let dst = &mut canvas.row_mut(top + dy)[left..left + layout.imsize];
                dst.copy_from_slice(src);
            }
        }
    }
    Ok(canvas)
}
