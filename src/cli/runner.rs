use crate::api::{crop_salient_to_path, process_directory};
use crate::core::params::CropParams;

use super::args::{BatchArgs, CropArgs};
use super::errors::AppError;

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn params_for_size(size: usize) -> Result<CropParams, AppError> {
    if size == 0 {
        return Err(AppError::ZeroSize { size });
    }
    Ok(CropParams {
        target_size: size,
        ..CropParams::default()
    })
}

/// Single-image flow: crop, write, confirm. Any pipeline error propagates and
/// exits the process non-zero.
pub fn run_single(args: CropArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = params_for_size(args.size)?;
    crop_salient_to_path(&args.input_path, &args.output_path, &params)?;
    println!("Cropped image saved to: {}", args.output_path.display());
    Ok(())
}

/// Batch flow: per-file status and errors are logged without stopping the
/// run; the process exits zero as long as the folder scan itself succeeded.
pub fn run_batch(args: BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = params_for_size(args.size)?;
    if !args.input_folder.is_dir() {
        return Err(AppError::NotADirectory {
            path: args.input_folder.display().to_string(),
        }
        .into());
    }

    let report = process_directory(&args.input_folder, &params, true)?;
    let attempted = report.processed + report.errors;
    if attempted == 0 {
        println!("No JPG images found in {}", args.input_folder.display());
        return Ok(());
    }

    println!("\nProcessing complete. Processed {} images.", attempted);
    Ok(())
}
