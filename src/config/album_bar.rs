use crate::chart::AlbumBarParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AlbumBarDemoConfig {
    /// JSON catalogue file (array of album records).
    pub catalog: PathBuf,
    /// Directory the catalogue's cover paths are relative to.
    pub images_dir: PathBuf,
    #[serde(default)]
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub imsize: usize,
    pub n_wide: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = AlbumBarParams::default();
        Self {
            imsize: params.imsize,
            n_wide: params.n_wide,
        }
    }
}

impl LayoutConfig {
    pub fn to_params(&self) -> AlbumBarParams {
        AlbumBarParams {
            imsize: self.imsize,
            n_wide: self.n_wide,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub chart_png: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AlbumBarDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
