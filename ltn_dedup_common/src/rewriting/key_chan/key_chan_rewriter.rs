use std::{io::Write, sync::Arc};

use crate::{error::Result, rewriting::rewriter::Rewriter, state::Config};

use super::{
    record::{Record, RecordScanner},
    seen::{KeyChan, SeenSet},
};

/// Counters for one rewrite pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Records found in the input
    pub records: usize,
    /// Records whose key or channel had to change
    pub adjusted: usize,
}

pub struct KeyChanRewriter {
    config: Arc<Config>,
    seen: SeenSet,
    summary: RewriteSummary,
}

impl KeyChanRewriter {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            seen: SeenSet::new(),
            summary: RewriteSummary::default(),
        }
    }

    pub fn summary(&self) -> RewriteSummary {
        self.summary
    }
}

impl Rewriter for KeyChanRewriter {
    fn rewrite(&mut self, input: Vec<u8>) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len());
        let mut copied_up_to = 0;

        for found in RecordScanner::new(&input) {
            output.extend_from_slice(&input[copied_up_to..found.span.start]);
            copied_up_to = found.span.end;

            let Record {
                id,
                key,
                chan,
                line_break,
            } = found.record;
            let wanted = KeyChan::new(key, chan);
            let claim = self.seen.claim(&wanted, self.config.octave_offset)?;
            self.summary.records += 1;

            // Untouched records keep their exact original bytes (leading zeros included).
            if claim.pair == wanted {
                output.extend_from_slice(&input[found.span]);
                continue;
            }

            tracing::debug!(
                id = %id,
                from_key = %wanted.key,
                from_chan = %wanted.chan,
                to_key = %claim.pair.key,
                to_chan = %claim.pair.chan,
                steps = claim.steps,
                "moved colliding record"
            );
            self.summary.adjusted += 1;

            write!(
                output,
                "Key_{id}={}{}Chan_{id}={}",
                claim.pair.key,
                line_break.as_str(),
                claim.pair.chan
            )?;
        }

        output.extend_from_slice(&input[copied_up_to..]);

        Ok(output)
    }
}
