pub mod key_chan;
pub mod rewriter;
