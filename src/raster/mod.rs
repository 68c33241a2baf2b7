pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{Rgb8, RgbImage8, BLACK, WHITE};
pub use self::traits::{RasterView, RasterViewMut, Rows, RowsMut};
