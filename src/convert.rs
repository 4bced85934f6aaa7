//! File-to-file scrubbing

use crate::body::extract_body;
use crate::classifier::scrub_body;
use crate::error::Result;
use crate::tagger::PosTagger;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scrub the email at `path` and write the cleaned body alongside it.
///
/// The output file is named `<stem>_clean<ext>` and the returned path
/// points at it. An out-of-range `threshold` is rejected before anything
/// is written.
pub fn scrub_file(
    path: impl AsRef<Path>,
    threshold: f64,
    tagger: &dyn PosTagger,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let raw = fs::read(path)?;
    let body = extract_body(&raw);
    let cleaned = scrub_body(&body, threshold, tagger)?;

    let output = derive_output_path(path);
    fs::write(&output, cleaned)?;
    debug!("Cleaned {} into {}", path.display(), output.display());

    Ok(output)
}

fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());
    let suffix = input
        .extension()
        .map_or_else(String::new, |ext| format!(".{}", ext.to_string_lossy()));
    input.with_file_name(format!("{stem}_clean{suffix}"))
}
