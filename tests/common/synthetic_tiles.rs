use album_charts::raster::{Rgb8, RgbImage8};

/// Generates a solid-colour square tile.
pub fn solid_tile(imsize: usize, colour: Rgb8) -> RgbImage8 {
    assert!(imsize > 0, "tile size must be positive");
    RgbImage8::filled(imsize, imsize, colour)
}
