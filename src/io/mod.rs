//! I/O layer: reading input text, deriving the processed output path, and
//! writing results. All reads and writes are whole-file and blocking.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to the input's stem when naming the output file.
pub const PROCESSED_SUFFIX: &str = "_processed.txt";

/// Derive the output path for `input_filename` under `output_dir`:
/// strip the last extension, append `_processed.txt`.
pub fn output_path(output_dir: &Path, input_filename: &str) -> PathBuf {
    let stem = Path::new(input_filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_filename.to_string());
    output_dir.join(format!("{stem}{PROCESSED_SUFFIX}"))
}

/// Read the whole input file as UTF-8.
///
/// Fails with `Error::InputNotFound` when the path does not resolve to an
/// existing regular file, before touching the filesystem any further.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Create the output directory if it does not exist yet. Idempotent.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write `text` as UTF-8, overwriting any existing file at `path`.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}
