//! Per-image salient-crop pipeline: padding, saliency, mask, centroid, crop,
//! resize. Stateless; each invocation owns its buffers and runs to completion
//! or failure independently of any other image.

use tracing::debug;

use crate::core::geometry::{CropPlan, CropRect};
use crate::core::mask;
use crate::core::moments;
use crate::core::processing::padding::pad_rgb;
use crate::core::processing::resize::resize_rgb;
use crate::core::saliency;
use crate::error::Result;

/// Crop a decoded RGB8 buffer around its salient region, producing a
/// `target_size` x `target_size` interleaved RGB buffer.
///
/// Padding (when the source is shorter than the crop size) happens before
/// saliency estimation, so the mask and centroid live in padded coordinates
/// and the crop rect is always satisfiable.
pub fn crop_salient_rgb(
    rgb: Vec<u8>,
    width: usize,
    height: usize,
    target_size: usize,
) -> Result<Vec<u8>> {
    let plan = CropPlan::new(width, height, target_size);

    let (rgb, width, height) = if plan.pad.is_zero() {
        (rgb, width, height)
    } else {
        pad_rgb(&rgb, width, height, &plan.pad)
    };

    let map = saliency::estimate(&rgb, width, height)?;
    let mask = mask::binarize(&map);
    let (cx, cy) = moments::centroid(&mask, width, height);
    let rect = plan.locate(cx, cy);
    debug!(
        "centroid=({}, {}) rect=({}, {}) size={} padded={}x{}",
        cx, cy, rect.x, rect.y, rect.size, width, height
    );

    let cropped = crop_rgb(&rgb, width, &rect);
    if rect.size == target_size {
        Ok(cropped)
    } else {
        resize_rgb(&cropped, rect.size, rect.size, target_size, target_size)
    }
}

/// Copy the square region out of an interleaved RGB8 buffer.
fn crop_rgb(rgb: &[u8], width: usize, rect: &CropRect) -> Vec<u8> {
    let mut out = Vec::with_capacity(rect.size * rect.size * 3);
    for row in rect.y..rect.y + rect.size {
        let start = (row * width + rect.x) * 3;
        out.extend_from_slice(&rgb[start..start + rect.size * 3]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot_rgb(width: usize, height: usize) -> Vec<u8> {
        // Dark field with a bright block off-center
        let mut rgb = vec![10u8; width * height * 3];
        for y in height / 4..height / 4 + height / 8 {
            for x in width / 4..width / 4 + width / 8 {
                let i = (y * width + x) * 3;
                rgb[i] = 250;
                rgb[i + 1] = 240;
                rgb[i + 2] = 230;
            }
        }
        rgb
    }

    #[test]
    fn output_is_exactly_target_square() {
        let (w, h) = (200, 160);
        let out = crop_salient_rgb(spot_rgb(w, h), w, h, 64).unwrap();
        assert_eq!(out.len(), 64 * 64 * 3);
    }

    #[test]
    fn padded_path_needs_no_resize() {
        // 100x100 with target 256: crop_size = max(256, 80) = 256, so the
        // source is padded to exactly 256x256 and sliced whole.
        let (w, h) = (100, 100);
        let out = crop_salient_rgb(spot_rgb(w, h), w, h, 256).unwrap();
        assert_eq!(out.len(), 256 * 256 * 3);
    }

    #[test]
    fn all_black_input_yields_black_square() {
        // Empty mask falls back to the center; output is the center crop.
        let (w, h) = (160, 160);
        let out = crop_salient_rgb(vec![0u8; w * h * 3], w, h, 64).unwrap();
        assert_eq!(out.len(), 64 * 64 * 3);
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn pipeline_is_deterministic() {
        let (w, h) = (144, 120);
        let rgb = spot_rgb(w, h);
        let a = crop_salient_rgb(rgb.clone(), w, h, 48).unwrap();
        let b = crop_salient_rgb(rgb, w, h, 48).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn crop_rgb_slices_the_requested_window() {
        // 4x4 image with row-major byte values; crop the 2x2 center
        let rgb: Vec<u8> = (0..4 * 4 * 3).map(|i| i as u8).collect();
        let rect = CropRect { x: 1, y: 1, size: 2 };
        let out = crop_rgb(&rgb, 4, &rect);
        let row = |y: usize, x: usize| {
            let i = (y * 4 + x) * 3;
            [rgb[i], rgb[i + 1], rgb[i + 2]]
        };
        assert_eq!(&out[0..3], &row(1, 1));
        assert_eq!(&out[3..6], &row(1, 2));
        assert_eq!(&out[6..9], &row(2, 1));
        assert_eq!(&out[9..12], &row(2, 2));
    }
}
