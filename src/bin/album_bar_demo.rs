use album_charts::catalog::load_catalog;
use album_charts::chart::{AlbumBarChart, ChartReport};
use album_charts::config::album_bar;
use album_charts::raster::io::{save_rgb_png, write_json_file};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = album_bar::load_config(Path::new(&config_path))?;

    let records = load_catalog(&config.catalog)?;

    let t0 = Instant::now();
    let chart = AlbumBarChart::from_catalog(&records, &config.images_dir, config.layout.to_params())?;
    chart.save_png(&config.output.chart_png)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    print_text_summary(&chart, records.len(), elapsed_ms);
    println!("Chart written to {}", config.output.chart_png.display());

    if let Some(path) = &config.output.report_json {
        let report = ChartReport::from_chart(&chart, elapsed_ms);
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &chart)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: album_bar_demo <config.json>".to_string()
}

fn print_text_summary(chart: &AlbumBarChart, total: usize, elapsed_ms: f64) {
    let (fw, fh) = chart.figure_size();
    println!("Album bar chart");
    println!("  albums: {total}");
    println!(
        "  stacks: {} rows x {} columns of {}px tiles",
        chart.n_high, chart.params.n_wide, chart.params.imsize
    );
    println!("  figure: {fw}x{fh}px");
    println!("  elapsed_ms: {elapsed_ms:.3}");
    for panel in &chart.panels {
        println!(
            "  rating {}: {} albums, aligned {}",
            panel.rating.value(),
            panel.count,
            if panel.trailing { "right" } else { "left" }
        );
    }
}

fn save_debug_artifacts(dir: &Path, chart: &AlbumBarChart) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create debug dir {}: {e}", dir.display()))?;
    for panel in &chart.panels {
        let path = dir.join(format!("stack_rating_{}.png", panel.rating.value()));
        save_rgb_png(&panel.stack, &path)?;
    }
    Ok(())
}
