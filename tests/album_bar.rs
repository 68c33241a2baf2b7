mod common;

use album_charts::chart::{AlbumBarChart, AlbumBarParams};
use album_charts::raster::{Rgb8, RgbImage8};
use common::synthetic_tiles::solid_tile;

const COVER: Rgb8 = [200, 10, 10];

fn tiles(imsize: usize, count: usize) -> Vec<RgbImage8> {
    vec![solid_tile(imsize, COVER); count]
}

#[test]
fn chart_assembles_five_equally_sized_panels() {
    let params = AlbumBarParams { imsize: 4, n_wide: 2 };
    let by_rating = [
        tiles(4, 3),
        tiles(4, 1),
        Vec::new(),
        Vec::new(),
        tiles(4, 2),
    ];
    let chart = AlbumBarChart::from_tiles(by_rating, params).expect("valid catalog");

    assert_eq!(chart.panels.len(), 5);
    // The fullest category (3 albums, 2 per row) dictates two rows for all.
    assert_eq!(chart.n_high, 2);
    for panel in &chart.panels {
        assert_eq!(
            (panel.stack.w, panel.stack.h),
            (8, 8),
            "rating {} stack size",
            panel.rating.value()
        );
    }
    assert_eq!(
        chart.panels.iter().map(|p| p.count).collect::<Vec<_>>(),
        vec![3, 1, 0, 0, 2]
    );
    // Alignment follows the taller neighbour (ties and end sentinels trail).
    assert_eq!(
        chart.panels.iter().map(|p| p.trailing).collect::<Vec<_>>(),
        vec![true, false, false, true, true]
    );
}

#[test]
fn empty_catalog_is_rejected() {
    let params = AlbumBarParams { imsize: 4, n_wide: 2 };
    let by_rating: [Vec<RgbImage8>; 5] = Default::default();
    let err = AlbumBarChart::from_tiles(by_rating, params).expect_err("nothing to chart");
    assert!(err.contains("no rated albums"), "unexpected error: {err}");
}

#[test]
fn oversized_tile_fails_with_its_rating() {
    let params = AlbumBarParams { imsize: 4, n_wide: 2 };
    let by_rating = [
        tiles(4, 1),
        vec![solid_tile(5, COVER)],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    ];
    let err = AlbumBarChart::from_tiles(by_rating, params).expect_err("tile size mismatch");
    assert!(
        err.contains("rating 2"),
        "error should name the category: {err}"
    );
}

#[test]
fn chart_renders_into_a_buffer() {
    let params = AlbumBarParams { imsize: 4, n_wide: 2 };
    let by_rating = [
        tiles(4, 3),
        tiles(4, 1),
        Vec::new(),
        Vec::new(),
        tiles(4, 2),
    ];
    let chart = AlbumBarChart::from_tiles(by_rating, params).expect("valid catalog");

    let mut buf = Vec::new();
    let (w, h) = chart.render_into_buffer(&mut buf).expect("render succeeds");
    assert_eq!((w, h), chart.figure_size());
    assert_eq!(buf.len(), (w * h * 3) as usize);

    let pixel = |x: u32, y: u32| {
        let i = ((y * w + x) * 3) as usize;
        [buf[i], buf[i + 1], buf[i + 2]]
    };
    // Margins stay on the white background.
    assert_eq!(pixel(0, 0), [255, 255, 255]);
    // The first panel's bottom-left tile is drawn pixel-exact. Panels
    // start after the left margin and below the top margin (56, 16);
    // probe one column in, clear of the axis spine drawn on the edge.
    let (_, ph) = chart.panel_size();
    assert_eq!(pixel(57, 16 + ph - 1), COVER);
}
