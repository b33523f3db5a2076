//! High-level, ergonomic library API: crop single images to files or
//! in-memory buffers, plus a batch helper for directories. Prefer these
//! entrypoints over the low-level processing modules when embedding salicrop.
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::CropParams;
use crate::core::processing::pipeline::crop_salient_rgb;
use crate::error::{Error, Result};
use crate::io::reader::load_rgb;
use crate::io::writers::webp::write_rgb_webp;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub width: usize,
    pub height: usize,
    /// Interleaved RGB, `width * height * 3` bytes
    pub rgb: Vec<u8>,
}

/// Summary of a directory run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    /// Images cropped and written
    pub processed: usize,
    /// Directory entries that were not case-variant `.jpg`/`.jpeg` files
    pub skipped: usize,
    /// Images that failed and were logged
    pub errors: usize,
}

/// Crop a single image to an in-memory RGB buffer (no output I/O).
pub fn crop_salient_to_buffer(input: &Path, params: &CropParams) -> Result<CroppedImage> {
    if params.target_size == 0 {
        return Err(Error::ZeroSize { size: 0 });
    }
    let decoded = load_rgb(input)?;
    let rgb = crop_salient_rgb(
        decoded.data,
        decoded.width,
        decoded.height,
        params.target_size,
    )?;
    Ok(CroppedImage {
        width: params.target_size,
        height: params.target_size,
        rgb,
    })
}

/// Crop a single image and write the WebP output, overwriting existing files.
pub fn crop_salient_to_path(input: &Path, output: &Path, params: &CropParams) -> Result<()> {
    let img = crop_salient_to_buffer(input, params)?;
    write_rgb_webp(output, img.width, img.height, &img.rgb, params.quality)
}

/// True for case-variant `.jpg`/`.jpeg` extensions.
fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

/// Process every JPEG directly inside `input_dir` (non-recursive), writing a
/// sibling `.webp` per source file.
///
/// With `continue_on_error` set, per-file failures are logged with their path
/// and counted; only a failed directory scan aborts the run. Each file runs
/// through an independent pipeline, so one corrupt image never affects the
/// others.
pub fn process_directory(
    input_dir: &Path,
    params: &CropParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_jpeg_path(&path) {
            report.skipped += 1;
            continue;
        }

        let output = path.with_extension("webp");
        info!("Processing: {:?}", path);
        match crop_salient_to_path(&path, &output, params) {
            Ok(()) => {
                info!("Saved as: {:?}", output);
                report.processed += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
