use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::naming::source_stem;
use crate::error::Result;

/// A file recognised as a source image by its name suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
    /// File name with the source suffix removed
    pub stem: String,
}

/// Outcome of listing a directory
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub sources: Vec<SourceImage>,
    /// Entries that did not qualify as sources
    pub skipped: usize,
}

/// List regular files in `dir` whose names end with `suffix`, sorted by path.
///
/// Subdirectories and names that are not valid UTF-8 are counted as skipped.
pub fn iterate_source_images(dir: &Path, suffix: &str) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name: {:?}", path);
            result.skipped += 1;
            continue;
        };

        match source_stem(name, suffix) {
            Some(stem) if path.is_file() => result.sources.push(SourceImage {
                stem: stem.to_owned(),
                path,
            }),
            _ => {
                debug!("Skipping: {:?}", path);
                result.skipped += 1;
            }
        }
    }

    result.sources.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(result)
}
