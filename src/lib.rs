#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod catalog;
pub mod chart;
pub mod raster;
pub mod stack;

// Demo plumbing – public so the demo binary can share it.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: compositor + chart assembly.
pub use crate::stack::{stack_images, StackError, StackLayout};

pub use crate::catalog::{load_catalog, AlbumRecord, Rating, RatingCounts};
pub use crate::chart::{AlbumBarChart, AlbumBarParams, ChartReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use album_charts::prelude::*;
///
/// # fn main() {
/// let tiles: Vec<RgbImage8> = (0..7)
///     .map(|k| RgbImage8::filled(32, 32, [30 * k as u8, 64, 128]))
///     .collect();
///
/// let layout = StackLayout {
///     imsize: 32,
///     n_wide: 3,
///     n_high: 3,
///     ..Default::default()
/// };
/// let canvas = stack_images(&tiles, &layout).expect("tiles fit the grid");
/// println!("canvas {}x{}", canvas.w, canvas.h);
/// # }
/// ```
pub mod prelude {
    pub use crate::catalog::{AlbumRecord, Rating};
    pub use crate::raster::{Rgb8, RgbImage8};
    pub use crate::{stack_images, AlbumBarChart, AlbumBarParams, StackLayout};
}
