pub mod album_bar;
pub mod report;

pub use self::album_bar::{AlbumBarChart, AlbumBarParams, CategoryPanel};
pub use self::report::{CategorySummary, ChartReport};
