use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use xlfind_search::{CancellationToken, SearchOptions, SearchOutcome, Upload, search_with};

use super::render;
use crate::config::Config;
use crate::output;

#[derive(Clone, Debug, Parser)]
#[command(name = "xlfind", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Folder to search, including subfolders and the zip files inside it
    #[arg(short, long)]
    pub root: Option<String>,

    /// File name keyword (case-insensitive, partial match). Repeatable.
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Read keywords from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub keywords_file: Option<PathBuf>,

    /// Search this file as if it had been uploaded. Repeatable.
    #[arg(short, long = "upload", value_name = "FILE")]
    pub uploads: Vec<PathBuf>,

    /// Where to write the bundle of matched files
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only list matches, do not write the bundle
    #[arg(long)]
    pub list_only: bool,

    /// Open zip files on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Stop scanning after this many seconds and keep what was found
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Configuration file (defaults to ./xlfind.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl App {
    pub fn run(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if !path.is_file() {
                bail!("config file '{}' not found", path.display());
            }
        }
        let config = Config::load(self.config.as_deref())
            .context("failed to load configuration")?
            .with_overrides(self)?;

        let uploads = read_uploads(&self.uploads)?;
        let cancel = CancellationToken::new();
        if let Some(secs) = config.timeout_secs {
            arm_timeout(cancel.clone(), Duration::from_secs(secs));
        }
        let options = SearchOptions::default()
            .parallel(config.parallel)
            .cancel(cancel);

        match search_with(config.root.as_deref(), uploads, config.keywords.as_slice(), &options) {
            SearchOutcome::InvalidInput(e) => Err(e).context("invalid search input"),
            SearchOutcome::Empty(report) => {
                render::report(&report);
                render::no_matches();
                Ok(())
            }
            SearchOutcome::Found(found) => {
                render::items(found.items());
                render::report(found.report());
                if self.list_only {
                    return Ok(());
                }

                let bytes = found.archive_bytes().context("failed to package matches")?;
                output::write_atomic(&config.output, &bytes)
                    .with_context(|| format!("failed to write '{}'", config.output.display()))?;
                render::written(&config.output, found.items().len());
                Ok(())
            }
        }
    }
}

fn read_uploads(paths: &[PathBuf]) -> Result<Vec<Upload>> {
    paths
        .iter()
        .map(|path| {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read upload '{}'", path.display()))?;
            Ok(Upload::new(upload_name(path), data))
        })
        .collect()
}

fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn arm_timeout(token: CancellationToken, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        tracing::warn!(?after, "time limit reached, stopping the scan");
        token.cancel();
    });
}
