use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Tab-separated generation log (fold, generation, _, average, best)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to config TOML
    #[arg(long, default_value = "fitplot.toml")]
    pub config: String,

    /// Also render the chart to a .png or .svg file
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not open the interactive viewer
    #[arg(long, default_value_t = false)]
    pub nogui: bool,
}
