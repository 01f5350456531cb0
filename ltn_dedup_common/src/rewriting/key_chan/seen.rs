use std::collections::HashSet;

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChan {
    pub key: BigInt,
    pub chan: BigInt,
}

impl KeyChan {
    pub fn new(key: impl Into<BigInt>, chan: impl Into<BigInt>) -> Self {
        Self {
            key: key.into(),
            chan: chan.into(),
        }
    }
}

/// Result of claiming a pair: the pair actually taken and how many steps it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub pair: KeyChan,
    pub steps: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    #[error("no free channel for key {key} after {steps} steps starting at channel {chan}")]
    SearchExhausted {
        key: BigInt,
        chan: BigInt,
        steps: usize,
    },
}

/// Every (key, channel) pair handed out so far in this run. Never shrinks.
#[derive(Debug, Default)]
pub struct SeenSet {
    pairs: HashSet<KeyChan>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Take the first free pair reachable from `wanted` by repeatedly moving one channel up
    /// and `octave_offset` keys down, and remember it.
    ///
    /// The channel grows by one on every step, so no pair is probed twice and at most as
    /// many steps as there are seen pairs can land on taken ones. Running past that bound is
    /// reported as `SearchExhausted` instead of looping.
    pub fn claim(
        &mut self,
        wanted: &KeyChan,
        octave_offset: i64,
    ) -> Result<Claim, CollisionError> {
        let budget = self.pairs.len();
        let octave_offset = BigInt::from(octave_offset);
        let mut pair = wanted.clone();
        let mut steps = 0;

        while self.pairs.contains(&pair) {
            if steps == budget {
                return Err(CollisionError::SearchExhausted {
                    key: wanted.key.clone(),
                    chan: wanted.chan.clone(),
                    steps,
                });
            }

            pair.chan += 1u32;
            pair.key -= &octave_offset;
            steps += 1;
        }

        self.pairs.insert(pair.clone());

        Ok(Claim { pair, steps })
    }
}
