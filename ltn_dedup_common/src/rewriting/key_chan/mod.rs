//! Key/channel deduplication for layout files.
//!
//! A record is a `Key_<id>=<key>` line immediately followed by a `Chan_<id>=<chan>` line.
//! The rewriter moves colliding records to the next free channel so that every
//! (key, channel) pair in the output is unique.

pub mod key_chan_rewriter;
pub mod record;
pub mod seen;
