//! Serializable summary of a chart run, for the demo's JSON output.
use crate::chart::album_bar::AlbumBarChart;
use serde::Serialize;

/// One rating category in the assembled chart.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub rating: u8,
    pub count: usize,
    /// Whether the stack was mirrored to the right edge.
    pub trailing: bool,
}

/// Aggregated report for one assembled album bar chart.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub total_albums: usize,
    pub tile_px: usize,
    pub columns_per_stack: usize,
    pub rows_per_stack: usize,
    pub figure_width: u32,
    pub figure_height: u32,
    pub categories: Vec<CategorySummary>,
    pub elapsed_ms: f64,
}

impl ChartReport {
    pub fn from_chart(chart: &AlbumBarChart, elapsed_ms: f64) -> Self {
        let (figure_width, figure_height) = chart.figure_size();
        Self {
            total_albums: chart.panels.iter().map(|p| p.count).sum(),
            tile_px: chart.params.imsize,
            columns_per_stack: chart.params.n_wide,
            rows_per_stack: chart.n_high,
            figure_width,
            figure_height,
            categories: chart
                .panels
                .iter()
                .map(|panel| CategorySummary {
                    rating: panel.rating.value(),
                    count: panel.count,
                    trailing: panel.trailing,
                })
                .collect(),
            elapsed_ms,
        }
    }
}
