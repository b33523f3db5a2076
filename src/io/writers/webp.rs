use std::fs;
use std::path::Path;

use webp::Encoder;

use crate::error::{Error, Result};

/// Encode an interleaved RGB8 buffer as lossy WebP at the given quality and
/// write it to `output`, overwriting any existing file.
pub fn write_rgb_webp(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
    quality: f32,
) -> Result<()> {
    let encoder = Encoder::from_rgb(rgb_data, cols as u32, rows as u32);
    let encoded = encoder.encode_simple(false, quality).map_err(|e| Error::Encode {
        path: output.to_path_buf(),
        reason: format!("{e:?}"),
    })?;
    fs::write(output, &*encoded).map_err(|e| Error::Encode {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(())
}
