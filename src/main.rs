//! CLI entry point for painting and rendering heatmaps

use clap::Parser;
use heatgrid::io::cli::{Cli, HeatmapRunner};

fn main() -> heatgrid::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let runner = HeatmapRunner::new(cli);
    runner.run().map(|_| ())
}
