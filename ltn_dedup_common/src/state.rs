use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name used to locate the configuration file in the platform config directory.
pub const APP_NAME: &str = "ltn_dedup";

/// Fixed name of the rewritten layout, created in the current working directory.
pub const OUTPUT_FILE_NAME: &str = "out.ltn";

/// Amount subtracted from the key on every collision-resolution step.
/// Zero leaves keys alone and only moves records to higher channels.
pub const OCTAVE_OFFSET: i64 = 0;

const fn default_octave_offset() -> i64 {
    OCTAVE_OFFSET
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key decrement applied alongside each channel increment while resolving a collision
    #[serde(default = "default_octave_offset")]
    pub octave_offset: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            octave_offset: OCTAVE_OFFSET,
        }
    }
}

impl Config {
    /// Where confy would look for the configuration of this tool.
    pub fn file_path() -> Result<PathBuf> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Load the configuration from `path` if it exists, falling back to the compiled defaults.
    ///
    /// Unlike `confy::load`, a missing file is never created.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        Ok(confy::load_path(path)?)
    }

    /// Like `load_from`, but an unreadable or malformed file only costs a warning: the
    /// rewrite then runs with the compiled defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Config::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
            Config::default()
        })
    }
}
