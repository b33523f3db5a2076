//! I/O layer: decoding source rasters to RGB8 and writing WebP outputs.
pub mod reader;
pub use reader::{DecodedImage, load_rgb};

pub mod writers;
