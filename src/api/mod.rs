//! High-level, ergonomic library API: process an input file to the output
//! directory, or transform text in memory. Prefer these entrypoints over the
//! low-level processing modules when embedding textmorph.
use std::path::PathBuf;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::apply_transforms;
use crate::error::Result;
use crate::io::{ensure_output_dir, output_path, read_input, write_output};
use crate::types::Transform;

/// Outcome of a successful processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Path the processed file was written to
    pub output: PathBuf,
    /// Transforms applied, in order; empty means a verbatim copy
    pub applied: Vec<Transform>,
}

/// Transform `text` in memory according to `params` (no disk I/O).
pub fn transform_text<R: Rng>(
    text: &str,
    params: &ProcessingParams,
    rng: &mut R,
) -> (String, Vec<Transform>) {
    apply_transforms(text, params, rng)
}

/// Process a single input file end to end.
///
/// Resolves `filename` against `params.input_dir`, reads it as UTF-8,
/// applies the selected transforms in their fixed order, and writes the
/// result under `params.output_dir` with the `_processed.txt` suffix.
/// Any failure along the way is terminal; a missing input file fails before
/// any side effect.
pub fn process_file<R: Rng>(
    filename: &str,
    params: &ProcessingParams,
    rng: &mut R,
) -> Result<ProcessReport> {
    let input_path = params.input_dir.join(filename);
    let text = read_input(&input_path)?;

    info!("Processing '{}'...", input_path.display());
    ensure_output_dir(&params.output_dir)?;

    let (processed, applied) = apply_transforms(&text, params, rng);

    if applied.is_empty() {
        warn!(
            "No processing options selected for '{}'. Output file will be a copy.",
            filename
        );
    }

    let output = output_path(&params.output_dir, filename);
    write_output(&output, &processed)?;

    if applied.is_empty() {
        info!("Copied original content to '{}'", output.display());
    } else {
        let names: Vec<String> = applied.iter().map(|t| t.to_string()).collect();
        info!(
            "Successfully applied [{}] and saved to '{}'",
            names.join(", "),
            output.display()
        );
    }

    Ok(ProcessReport { output, applied })
}
