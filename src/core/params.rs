use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory input filenames are resolved against.
pub const INPUT_DIR: &str = "inputs";
/// Default directory processed files are written to; created on demand.
pub const OUTPUT_DIR: &str = "outputs";

/// Processing parameters suitable for config files and embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Randomize the case of each ASCII letter (independent fair coin flip)
    pub randomize_case: bool,
    /// Reverse the character sequence (applied after case randomization)
    pub reverse: bool,
    /// Directory input filenames are resolved against
    pub input_dir: PathBuf,
    /// Directory output files are written to; created if missing
    pub output_dir: PathBuf,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            randomize_case: false,
            reverse: false,
            input_dir: PathBuf::from(INPUT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}
