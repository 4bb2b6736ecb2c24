use edge_detector::config::load_config;
use edge_detector::image::PngCodec;
use edge_detector::{run_pipeline, EdgeError};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    println!("Edge detection started.");
    let report = run_pipeline(&config, &PngCodec).map_err(|e| match e {
        EdgeError::Decode(_) => format!(
            "{e}. Check that {} exists and is a readable image.",
            config.input.display()
        ),
        other => other.to_string(),
    })?;

    println!(
        "Saved thresholded image to {} ({}x{}, {} edge pixels, {:.1}%)",
        config.output.threshold.display(),
        report.width,
        report.height,
        report.white_pixels,
        report.edge_ratio() * 100.0
    );
    if let Some(path) = &config.output.report {
        println!("Saved report to {}", path.display());
    }
    println!("Edge detection completed in {:.3} ms.", report.timing.total_ms);
    Ok(())
}

fn usage() -> String {
    "Usage: edge_detect <config.json>".to_string()
}
