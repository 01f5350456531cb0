use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use ltn_dedup_common::{
    error::Result,
    run,
    state::{Config, OUTPUT_FILE_NAME},
};
use scorched::{logf, LogData, LogImportance};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Give every Key/Chan record of a layout file a unique (key, channel) pair
#[derive(Parser, Debug)]
#[command(name = "ltn_dedup")]
#[command(version)]
struct Args {
    /// Layout file to rewrite; the result is written to out.ltn in the current directory
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ltn_dedup_common=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match Config::file_path() {
        Ok(path) => {
            if path.exists() {
                logf!(Info, "Loading config from file: {}", path.display());
            }
            Config::load_or_default(&path)
        }
        Err(e) => {
            logf!(Warning, "Cannot locate config file, using defaults: {}", e);
            Config::default()
        }
    };
    let config = Arc::new(config);

    let summary = match run(config, &args.input, Path::new(OUTPUT_FILE_NAME)) {
        Ok(summary) => summary,
        Err(e) => {
            logf!(Error, "Error rewriting {}: {}", args.input.display(), e);
            return Err(e);
        }
    };

    logf!(
        Info,
        "Wrote {} ({} records, {} moved)",
        OUTPUT_FILE_NAME,
        summary.records,
        summary.adjusted
    );

    Ok(())
}
