//! High-level library API: scale a decoded image in memory, write every variant
//! of one source file, or run the whole batch over a directory. Prefer these
//! entrypoints over the low-level modules when embedding iconscale.
use std::fs;
use std::path::{Path, PathBuf};

use fast_image_resize::Resizer;
use image::DynamicImage;
use tracing::{info, warn};

use crate::core::naming::derived_file_name;
use crate::core::params::ScaleParams;
use crate::core::processing::resize::resize_square_with;
use crate::error::Result;
use crate::io::writers::png::write_png;
use crate::io::{SourceImage, iterate_source_images, open_image};

/// One derived image held in memory
#[derive(Debug, Clone)]
pub struct ScaledImage {
    pub size: u32,
    pub image: DynamicImage,
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Sources whose variants were all written
    pub processed: usize,
    /// Directory entries that are not sources
    pub skipped: usize,
    /// Sources that failed (only non-zero with `continue_on_error`)
    pub errors: usize,
    /// Derived files written
    pub written: usize,
}

/// Scale `image` to every size in `params`, in order, without touching disk.
pub fn scale_image(image: &DynamicImage, params: &ScaleParams) -> Result<Vec<ScaledImage>> {
    let mut resizer = Resizer::new();
    params
        .sizes
        .iter()
        .map(|&size| {
            let image = resize_square_with(&mut resizer, image, size, params.filter)?;
            Ok(ScaledImage { size, image })
        })
        .collect()
}

/// True if both paths resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Decode `source` and write one PNG per target size into `output_dir`.
/// Returns the written paths in size order.
pub fn process_source_file(
    source: &SourceImage,
    output_dir: &Path,
    params: &ScaleParams,
) -> Result<Vec<PathBuf>> {
    let image = open_image(&source.path)?;
    info!(
        "Processing: {:?} ({}x{})",
        source.path,
        image.width(),
        image.height()
    );

    let mut resizer = Resizer::new();
    let mut written = Vec::with_capacity(params.sizes.len());
    for &size in &params.sizes {
        let output_path =
            output_dir.join(derived_file_name(&source.stem, &params.output_template, size));
        if is_same_file(&output_path, &source.path) {
            warn!("Size {} would overwrite the source {:?}; skipping", size, source.path);
            continue;
        }
        let scaled = resize_square_with(&mut resizer, &image, size, params.filter)?;
        write_png(&output_path, &scaled)?;
        info!("Wrote {:?}", output_path);
        written.push(output_path);
    }

    Ok(written)
}

/// Process every source image in `input_dir`.
///
/// Derived files go next to the sources unless `params.output_dir` is set, in
/// which case that directory is created first. If `params.continue_on_error` is
/// true, per-file failures are counted in the report and processing continues;
/// otherwise the first error is returned.
pub fn process_directory(input_dir: &Path, params: &ScaleParams) -> Result<BatchReport> {
    params.validate()?;

    let output_dir = params.resolve_output_dir(input_dir);
    if params.output_dir.is_some() {
        std::fs::create_dir_all(output_dir)?;
        // The output dir may name the input dir through another path
        if fs::canonicalize(output_dir)? == fs::canonicalize(input_dir)? {
            params.check_in_place_overwrite()?;
        }
    }

    info!("Starting batch from directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let scan = iterate_source_images(input_dir, &params.source_suffix)?;
    let mut report = BatchReport {
        skipped: scan.skipped,
        ..BatchReport::default()
    };

    for source in &scan.sources {
        match process_source_file(source, output_dir, params) {
            Ok(paths) => {
                report.processed += 1;
                report.written += paths.len();
            }
            Err(e) => {
                report.errors += 1;
                if !params.continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", source.path, e);
            }
        }
    }

    info!("Batch complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    info!("Written: {}", report.written);

    Ok(report)
}
