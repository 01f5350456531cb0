pub mod error;
pub mod file;
pub mod rewriting;
pub mod state;

use std::{path::Path, sync::Arc};

use error::Result;
use rewriting::{
    key_chan::key_chan_rewriter::{KeyChanRewriter, RewriteSummary},
    rewriter::Rewriter,
};
use state::Config;

/// Rewrite the layout at `input` so every (key, channel) pair is unique and store it at `output`.
///
/// The input is read completely before `output` is touched, so a missing input leaves an
/// existing output file alone.
pub fn run(config: Arc<Config>, input: &Path, output: &Path) -> Result<RewriteSummary> {
    let contents = file::read_input(input)?;

    let mut rewriter = KeyChanRewriter::new(config);
    let rewritten = rewriter.rewrite(contents)?;
    let summary = rewriter.summary();

    file::write_output(output, &rewritten)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        records = summary.records,
        adjusted = summary.adjusted,
        "rewrote layout"
    );

    Ok(summary)
}
