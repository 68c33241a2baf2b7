//! Album-cover bar chart: one picture stack per rating category.
//!
//! Assembly mirrors the shape of the final figure: records are grouped by
//! rating (1–5) in catalogue order, each group is loaded as square cover
//! tiles and stacked bottom-up into a panel, and all five panels share the
//! row count of the fullest category so their baselines line up. A
//! category whose lower neighbour is sparser than its upper one is
//! mirrored to the right edge, keeping the short top row flush against
//! the taller side.
use crate::catalog::{AlbumRecord, Rating, RatingCounts};
use crate::raster::io::{ensure_parent_dir, load_cover_tile};
use crate::raster::RgbImage8;
use crate::stack::{stack_images, StackLayout};
use log::debug;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

// Fixed chrome around the pixel-exact panels.
const TOP_MARGIN: u32 = 16;
const BOTTOM_MARGIN: u32 = 36;
const LEFT_MARGIN: u32 = 56;
const RIGHT_MARGIN: u32 = 16;
const PANEL_GAP: u32 = 12;
const TICK_LEN: i32 = 4;

/// Tile and grid geometry shared by all five stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlbumBarParams {
    /// Tile edge length in pixels.
    pub imsize: usize,
    /// Tiles per stack row.
    pub n_wide: usize,
}

impl Default for AlbumBarParams {
    fn default() -> Self {
        Self {
            imsize: 64,
            n_wide: 5,
        }
    }
}

/// One assembled rating category.
#[derive(Clone, Debug)]
pub struct CategoryPanel {
    pub rating: Rating,
    pub count: usize,
    /// Whether the stack was mirrored to the right edge.
    pub trailing: bool,
    pub stack: RgbImage8,
}

/// The assembled chart: five equally sized stacks plus shared geometry.
#[derive(Clone, Debug)]
pub struct AlbumBarChart {
    pub panels: Vec<CategoryPanel>,
    /// Tile rows per stack (the fullest category rounded up).
    pub n_high: usize,
    pub params: AlbumBarParams,
}

impl AlbumBarChart {
    /// Group `records` by rating, load their cover tiles from
    /// `images_dir` and assemble the chart.
    pub fn from_catalog(
        records: &[AlbumRecord],
        images_dir: &Path,
        params: AlbumBarParams,
    ) -> Result<Self, String> {
        let t0 = Instant::now();
        let mut tiles_by_rating: [Vec<RgbImage8>; 5] = Default::default();
        for (slot, rating) in tiles_by_rating.iter_mut().zip(Rating::ALL) {
            let files: Vec<&Path> = records
                .iter()
                .filter(|r| r.rating == rating)
                .map(|r| r.img.as_path())
                .collect();
            *slot = files
                .par_iter()
                .map(|file| load_cover_tile(&images_dir.join(file), params.imsize))
                .collect::<Result<Vec<_>, String>>()?;
            debug!("rating {}: loaded {} cover tiles", rating.value(), slot.len());
        }
        debug!(
            "loaded {} covers in {:.3} ms",
            tiles_by_rating.iter().map(Vec::len).sum::<usize>(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Self::from_tiles(tiles_by_rating, params)
    }

    /// Assemble from already-loaded tiles, listed per rating in ascending
    /// order. Every tile must be `imsize × imsize`.
    pub fn from_tiles(
        tiles_by_rating: [Vec<RgbImage8>; 5],
        params: AlbumBarParams,
    ) -> Result<Self, String> {
        let counts = RatingCounts::from_per_rating(
            [0, 1, 2, 3, 4].map(|i: usize| tiles_by_rating[i].len()),
        );
        let n_high = counts.rows_needed(params.n_wide);
        if n_high == 0 {
            return Err("catalog has no rated albums to chart".to_string());
        }

        let mut panels = Vec::with_capacity(Rating::ALL.len());
        for (tiles, rating) in tiles_by_rating.iter().zip(Rating::ALL) {
            let trailing = counts.prefers_trailing(rating);
            let layout = StackLayout {
                imsize: params.imsize,
                n_wide: params.n_wide,
                n_high,
                inv: trailing,
                vert: true,
            };
            let stack = stack_images(tiles, &layout)
                .map_err(|e| format!("Failed to stack rating {} covers: {e}", rating.value()))?;
            debug!(
                "rating {}: {} tiles stacked, trailing={}",
                rating.value(),
                tiles.len(),
                trailing
            );
            panels.push(CategoryPanel {
                rating,
                count: tiles.len(),
                trailing,
                stack,
            });
        }
        Ok(Self {
            panels,
            n_high,
            params,
        })
    }

    /// Stack size in pixels (identical for every panel).
    pub fn panel_size(&self) -> (u32, u32) {
        (
            (self.params.n_wide * self.params.imsize) as u32,
            (self.n_high * self.params.imsize) as u32,
        )
    }

    /// Full figure size including margins and inter-panel gaps.
    pub fn figure_size(&self) -> (u32, u32) {
        let (pw, ph) = self.panel_size();
        let n = self.panels.len() as u32;
        (
            LEFT_MARGIN + RIGHT_MARGIN + n * pw + (n - 1) * PANEL_GAP,
            TOP_MARGIN + BOTTOM_MARGIN + ph,
        )
    }

    /// Draw the chart onto a pixel-addressed drawing area sized
    /// [`figure_size`](Self::figure_size).
    pub fn render<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, plotters::coord::Shift>,
    ) -> Result<(), String> {
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to clear figure: {e}"))?;

        let (pw, ph) = self.panel_size();
        let label_style = ("sans-serif", 18)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));

        for (idx, panel) in self.panels.iter().enumerate() {
            let x0 = (LEFT_MARGIN + idx as u32 * (pw + PANEL_GAP)) as i32;
            let y0 = TOP_MARGIN as i32;
            let bitmap: BitMapElement<(i32, i32)> =
                BitMapElement::with_owned_buffer((x0, y0), (pw, ph), panel.stack.to_flat())
                    .ok_or_else(|| {
                        format!(
                            "Stack buffer size mismatch for rating {}",
                            panel.rating.value()
                        )
                    })?;
            root.draw(&bitmap)
                .map_err(|e| format!("Failed to draw rating {} stack: {e}", panel.rating.value()))?;
            root.draw(&Text::new(
                panel.rating.value().to_string(),
                (x0 + pw as i32 / 2, y0 + ph as i32 + 8),
                label_style.clone(),
            ))
            .map_err(|e| format!("Failed to draw category label: {e}"))?;
        }

        // Left spine with a count tick per tile row, in n_wide steps.
        let spine_x = LEFT_MARGIN as i32;
        let top = TOP_MARGIN as i32;
        root.draw(&PathElement::new(
            vec![(spine_x, top), (spine_x, top + ph as i32)],
            &BLACK,
        ))
        .map_err(|e| format!("Failed to draw axis spine: {e}"))?;
        let tick_style = ("sans-serif", 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for k in 0..=self.n_high {
            let y = top + ph as i32 - (k * self.params.imsize) as i32;
            root.draw(&PathElement::new(
                vec![(spine_x - TICK_LEN, y), (spine_x, y)],
                &BLACK,
            ))
            .map_err(|e| format!("Failed to draw axis tick: {e}"))?;
            root.draw(&Text::new(
                (k * self.params.n_wide).to_string(),
                (spine_x - TICK_LEN - 4, y),
                tick_style.clone(),
            ))
            .map_err(|e| format!("Failed to draw tick label: {e}"))?;
        }

        Ok(())
    }

    /// Render to a PNG file, creating parent directories.
    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        ensure_parent_dir(path)?;
        let root = BitMapBackend::new(path, self.figure_size()).into_drawing_area();
        self.render(&root)?;
        root.present()
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }

    /// Render into an interleaved-RGB buffer, resizing it to fit.
    /// Returns the figure size.
    pub fn render_into_buffer(&self, buf: &mut Vec<u8>) -> Result<(u32, u32), String> {
        let (w, h) = self.figure_size();
        buf.clear();
        buf.resize((w * h * 3) as usize, 0);
        {
            let root = BitMapBackend::with_buffer(buf, (w, h)).into_drawing_area();
            self.render(&root)?;
            root.present()
                .map_err(|e| format!("Failed to finalize figure: {e}"))?;
        }
        Ok((w, h))
    }
}
