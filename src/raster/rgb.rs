//! Owned 3-channel RGB image in row-major layout (stride == width).
//!
//! This is the tile and canvas type of the stacking pipeline: every cover
//! tile and every stacked canvas is an `RgbImage8`. Pixels are `[u8; 3]`
//! so a row is a plain slice of pixels and the channel count is fixed by
//! the type rather than checked at runtime.
use crate::raster::traits::{RasterView, RasterViewMut};

/// One RGB pixel, channels in the 0–255 byte range.
pub type Rgb8 = [u8; 3];

pub const WHITE: Rgb8 = [255, 255, 255];
pub const BLACK: Rgb8 = [0, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgb8>,
}

impl RgbImage8 {
    /// Construct a buffer of size `w × h` filled with one colour.
    pub fn filled(w: usize, h: usize, px: Rgb8) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![px; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: Rgb8) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    /// Paint the one-pixel border frame of the image.
    pub fn outline(&mut self, px: Rgb8) {
        if self.w == 0 || self.h == 0 {
            return;
        }
        let (w, h) = (self.w, self.h);
        for (y, row) in self.rows_mut().enumerate() {
            if y == 0 || y == h - 1 {
                row.fill(px);
            } else {
                row[0] = px;
                row[w - 1] = px;
            }
        }
    }

    /// Reassemble from a flat interleaved-RGB byte buffer of length
    /// `w * h * 3`. Returns `None` on a length mismatch.
    pub fn from_flat(w: usize, h: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != w * h * 3 {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Flatten to an interleaved-RGB byte buffer (for encoders and
    /// drawing backends).
    pub fn to_flat(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h * 3);
        for px in &self.data {
            out.extend_from_slice(px);
        }
        out
    }
}

impl RasterView for RgbImage8 {
    type Pixel = Rgb8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgb8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl RasterViewMut for RgbImage8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [Rgb8]> {
        if self.stride == self.w {
            Some(&mut self.data[..self.w * self.h])
        } else {
            None
        }
    }
}
