// Entry point: parse the generation log, optionally export, then open the viewer.
use std::error::Error;
use std::io;
use std::process::ExitCode;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fitplot::app::run_viewer;
use fitplot::cli::Args;
use fitplot::config::AppConfig;
use fitplot::export::export_chart;
use fitplot::reader::read_curves_from_path;
use fitplot::ui::viewdata::ChartView;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_or_default(&args.config);

    let curves = read_curves_from_path(&args.input)?;
    info!(folds = curves.len(), "generation log parsed");

    if let Some(out) = &args.output {
        export_chart(out, &curves, &config.chart, &config.export)?;
    }

    if args.nogui {
        return Ok(());
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })?;

    let source = args.input.display().to_string();
    let view = ChartView::from_curves(&source, &curves, &config.chart);
    run_viewer(view, &config.viewer, stop_flag)?;
    Ok(())
}
