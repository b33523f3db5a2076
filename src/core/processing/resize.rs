use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};

use crate::error::{Error, Result};

/// Lanczos3 resize of an interleaved RGB8 buffer. The same filter serves both
/// downscaling and upscaling.
pub fn resize_rgb(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x3,
    )
    .map_err(Error::processing)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::processing)?;

    Ok(dst_image.into_vec())
}

/// Bilinear resize of a single-channel f32 plane (the saliency analysis path).
pub fn resize_f32_plane(
    data: &[f32],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<f32>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();

    // f32 samples travel as little-endian bytes through the resizer
    let mut src_bytes = Vec::with_capacity(data.len() * 4);
    for &v in data {
        src_bytes.extend_from_slice(&v.to_le_bytes());
    }

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        src_bytes,
        PixelType::F32,
    )
    .map_err(Error::processing)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::F32);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::processing)?;

    let dst_bytes = dst_image.into_vec();
    let mut out = Vec::with_capacity(dst_bytes.len() / 4);
    for chunk in dst_bytes.chunks_exact(4) {
        out.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    Ok(out)
}
