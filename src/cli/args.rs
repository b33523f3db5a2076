use clap::Parser;
use std::path::PathBuf;

/// Arguments for the single-image tool.
#[derive(Parser)]
#[command(name = "salicrop", version, about = "Crop an image to its salient region")]
pub struct CropArgs {
    /// Path to the input image
    pub input_path: PathBuf,

    /// Path for the output WebP image
    pub output_path: PathBuf,

    /// Target size for the output image
    #[arg(long, default_value_t = 1024)]
    pub size: usize,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Arguments for the batch tool.
#[derive(Parser)]
#[command(
    name = "salicrop-batch",
    version,
    about = "Crop a folder of JPG images to their salient regions"
)]
pub struct BatchArgs {
    /// Path to the folder containing JPG images
    pub input_folder: PathBuf,

    /// Target size for the output images
    #[arg(long, default_value_t = 1024)]
    pub size: usize,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
