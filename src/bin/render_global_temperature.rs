use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use heatmap_rs::api::{HeatmapConfig, HeatmapEngine};
use heatmap_rs::data::{GLOBAL_TEMPERATURE_URL, fetch_global_temperature};
use heatmap_rs::platform_web::HeatmapPage;
use heatmap_rs::render::SvgRenderer;

struct CliArgs {
    url: String,
    output: PathBuf,
}

fn parse_args() -> CliArgs {
    let mut args = env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| GLOBAL_TEMPERATURE_URL.to_owned());
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("global-temperature.html"));
    CliArgs { url, output }
}

fn main() -> ExitCode {
    let _ = heatmap_rs::telemetry::init_default_tracing();
    let args = parse_args();

    // One request, no retry. A failed load renders nothing.
    let dataset = match fetch_global_temperature(&args.url) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!(error = %err, url = %args.url, "temperature document load failed");
            return ExitCode::FAILURE;
        }
    };

    let engine = HeatmapEngine::new(SvgRenderer::new(), HeatmapConfig::default(), dataset);
    let mut engine = match engine {
        Ok(engine) => engine,
        Err(err) => {
            error!(error = %err, "heatmap engine setup failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = engine.render() {
        error!(error = %err, "heatmap render failed");
        return ExitCode::FAILURE;
    }

    let html = match engine
        .into_renderer()
        .into_document()
        .and_then(|svg| HeatmapPage::new(svg))
    {
        Ok(page) => page.to_html(),
        Err(err) => {
            error!(error = %err, "page assembly failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::write(&args.output, html) {
        error!(error = %err, output = %args.output.display(), "failed to write page");
        return ExitCode::FAILURE;
    }

    info!(output = %args.output.display(), "wrote temperature heatmap page");
    ExitCode::SUCCESS
}
