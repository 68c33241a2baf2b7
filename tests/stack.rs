mod common;

use album_charts::raster::{Rgb8, RgbImage8, WHITE};
use album_charts::stack::{stack_images, StackLayout};
use common::synthetic_tiles::solid_tile;

const RED: Rgb8 = [200, 10, 10];
const GREEN: Rgb8 = [10, 200, 10];
const BLUE: Rgb8 = [10, 10, 200];

/// True when every pixel of cell (`band_row`, `band_col`), counted from
/// the top-left of the canvas in `imsize` steps, has the given colour.
fn cell_is(canvas: &RgbImage8, imsize: usize, band_row: usize, band_col: usize, colour: Rgb8) -> bool {
    (0..imsize).all(|dy| {
        (0..imsize).all(|dx| canvas.get(band_col * imsize + dx, band_row * imsize + dy) == colour)
    })
}

#[test]
fn canvas_matches_requested_size() {
    let tiles = vec![solid_tile(3, RED); 4];
    let layout = StackLayout {
        imsize: 3,
        n_wide: 2,
        n_high: 3,
        ..Default::default()
    };
    let canvas = stack_images(&tiles, &layout).expect("tiles fit the grid");
    assert_eq!(canvas.w, 2 * 3);
    assert_eq!(canvas.h, 3 * 3);
    assert_eq!(canvas.data.len(), canvas.w * canvas.h);
}

#[test]
fn left_aligned_fill_grows_from_the_bottom() {
    let tiles = vec![solid_tile(2, RED), solid_tile(2, GREEN), solid_tile(2, BLUE)];
    let layout = StackLayout {
        imsize: 2,
        n_wide: 2,
        n_high: 2,
        ..Default::default()
    };
    let canvas = stack_images(&tiles, &layout).expect("tiles fit the grid");

    // First group of two fills the bottom band left to right.
    assert!(cell_is(&canvas, 2, 1, 0, RED));
    assert!(cell_is(&canvas, 2, 1, 1, GREEN));
    // The short second group sits above it, against the left edge.
    assert!(cell_is(&canvas, 2, 0, 0, BLUE));
    // The unassigned cell stays white.
    assert!(cell_is(&canvas, 2, 0, 1, WHITE));
}

#[test]
fn right_aligned_fill_pushes_the_short_row_to_the_right_edge() {
    let tiles = vec![solid_tile(2, RED), solid_tile(2, GREEN), solid_tile(2, BLUE)];
    let layout = StackLayout {
        imsize: 2,
        n_wide: 2,
        n_high: 2,
        inv: true,
        ..Default::default()
    };
    let canvas = stack_images(&tiles, &layout).expect("tiles fit the grid");

    // The lone tile of the short top row hugs the right edge.
    assert!(cell_is(&canvas, 2, 0, 1, BLUE));
    assert!(cell_is(&canvas, 2, 0, 0, WHITE));
}

#[test]
fn left_aligned_rows_preserve_input_order() {
    let tiles = vec![solid_tile(2, RED), solid_tile(2, GREEN)];
    let layout = StackLayout {
        imsize: 2,
        n_wide: 2,
        n_high: 1,
        ..Default::default()
    };
    let canvas = stack_images(&tiles, &layout).expect("tiles fit the grid");
    assert!(cell_is(&canvas, 2, 0, 0, RED));
    assert!(cell_is(&canvas, 2, 0, 1, GREEN));
}

#[test]
fn right_aligned_fill_mirrors_every_row() {
    // Cell j maps to column n_wide - j - 1, so a full row reads reversed.
    let tiles = vec![solid_tile(2, RED), solid_tile(2, GREEN)];
    let layout = StackLayout {
        imsize: 2,
        n_wide: 2,
        n_high: 1,
        inv: true,
        ..Default::default()
    };
    let canvas = stack_images(&tiles, &layout).expect("tiles fit the grid");
    assert!(cell_is(&canvas, 2, 0, 1, RED));
    assert!(cell_is(&canvas, 2, 0, 0, GREEN));
}

#[test]
fn empty_input_yields_an_all_white_canvas() {
    for inv in [false, true] {
        let layout = StackLayout {
            imsize: 4,
            n_wide: 3,
            n_high: 2,
            inv,
            ..Default::default()
        };
        let tiles: Vec<RgbImage8> = Vec::new();
        let canvas = stack_images(&tiles, &layout).expect("empty input is valid");
        assert_eq!((canvas.w, canvas.h), (12, 8));
        assert!(
            canvas.data.iter().all(|&px| px == WHITE),
            "expected an untouched white canvas (inv={inv})"
        );
    }
}

#[test]
fn identical_calls_yield_identical_canvases() {
    let tiles = vec![solid_tile(2, RED), solid_tile(2, GREEN), solid_tile(2, BLUE)];
    let layout = StackLayout {
        imsize: 2,
        n_wide: 2,
        n_high: 2,
        inv: true,
        ..Default::default()
    };
    let first = stack_images(&tiles, &layout).expect("tiles fit the grid");
    let second = stack_images(&tiles, &layout).expect("tiles fit the grid");
    assert_eq!(first, second);
}
