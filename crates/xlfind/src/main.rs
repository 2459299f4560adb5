use clap::Parser;

use crate::cli::App;

mod cli;
mod config;
mod output;

fn main() -> anyhow::Result<()> {
    let app = App::parse();

    // stdout carries the listing, logs go to stderr
    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    app.run()
}
