//! Source decoding: any format the `image` crate reads, normalized to an
//! interleaved RGB8 buffer. Decoding failure carries the attempted path.

use std::path::Path;

use crate::error::{Error, Result};

/// A decoded image in the pipeline's working representation.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    /// Interleaved RGB, `width * height * 3` bytes
    pub data: Vec<u8>,
}

/// Decode the file at `path` into interleaved RGB8.
pub fn load_rgb(path: &Path) -> Result<DecodedImage> {
    let img = image::open(path).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        data: rgb.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_rgb(Path::new("/no/such/image.jpg")).unwrap_err();
        assert!(err.to_string().contains("/no/such/image.jpg"));
    }
}
