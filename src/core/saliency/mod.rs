//! Spectral-residual saliency estimation (Hou & Zhang).
//!
//! The log-amplitude spectrum of natural images is roughly smooth; whatever
//! sticks out of a locally averaged version of it is the "novel" part of the
//! scene. Reconstructing an image from that residual amplitude and the
//! original phase concentrates energy on visually surprising regions.
//!
//! Analysis runs on a fixed 64x64 grayscale grid and the resulting map is
//! resampled back to the source resolution, so cost is independent of image
//! size. Output values are relative and unnormalized; `mask::binarize` owns
//! the rescaling into the 8-bit range.

mod fft;

use ndarray::Array2;
use num_complex::Complex;

use crate::core::processing::resize::resize_f32_plane;
use crate::error::{Error, Result};

/// Side of the square grid the spectral analysis runs on.
const ANALYSIS_SIZE: usize = 64;
/// Gaussian applied to the reconstructed map before upsampling.
const SMOOTH_RADIUS: usize = 2;
const SMOOTH_SIGMA: f32 = 8.0;

/// Rec.601 luma from an interleaved RGB8 buffer.
pub fn rgb_to_luma(rgb: &[u8]) -> Vec<f32> {
    rgb.chunks_exact(3)
        .map(|p| 0.299 * p[0] as f32 + 0.587 * p[1] as f32 + 0.114 * p[2] as f32)
        .collect()
}

/// Estimate a per-pixel saliency map for an interleaved RGB8 image.
///
/// Returns a `height` x `width` map of relative importance scores. Fails with
/// [`Error::Saliency`] when the input is degenerate or the reconstruction
/// produces non-finite values; callers abort that image's run, not the batch.
pub fn estimate(rgb: &[u8], width: usize, height: usize) -> Result<Array2<f32>> {
    if width == 0 || height == 0 || rgb.len() != width * height * 3 {
        return Err(Error::Saliency(format!(
            "degenerate input: {width}x{height}, {} bytes",
            rgb.len()
        )));
    }

    let luma = rgb_to_luma(rgb);
    let small = resize_f32_plane(&luma, width, height, ANALYSIS_SIZE, ANALYSIS_SIZE)?;

    // A constant frame has no spectral novelty. Emit a flat map so the mask
    // comes out empty and the centroid falls back to the image center.
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in &small {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi - lo < 0.5 {
        return Ok(Array2::zeros((height, width)));
    }

    let n = ANALYSIS_SIZE;
    let mut spectrum = Array2::<Complex<f32>>::zeros((n, n));
    for (dst, &v) in spectrum.iter_mut().zip(small.iter()) {
        *dst = Complex::new(v, 0.0);
    }
    fft::fft2(&mut spectrum, false);

    let mut log_amplitude = Array2::<f32>::zeros((n, n));
    let mut phase = Array2::<f32>::zeros((n, n));
    for ((r, c), v) in spectrum.indexed_iter() {
        log_amplitude[[r, c]] = v.norm().max(1e-12).ln();
        phase[[r, c]] = v.im.atan2(v.re);
    }

    // The residual is what a 3x3 local average of the log spectrum misses
    let smoothed = box_blur3(&log_amplitude);
    for ((r, c), v) in spectrum.indexed_iter_mut() {
        let residual = (log_amplitude[[r, c]] - smoothed[[r, c]]).exp();
        *v = Complex::from_polar(residual, phase[[r, c]]);
    }

    fft::fft2(&mut spectrum, true);

    let mut map = Array2::<f32>::zeros((n, n));
    for ((r, c), v) in spectrum.indexed_iter() {
        map[[r, c]] = v.norm_sqr();
    }
    let map = gaussian_blur(&map, SMOOTH_RADIUS, SMOOTH_SIGMA);

    if map.iter().any(|v| !v.is_finite()) {
        return Err(Error::Saliency(
            "non-finite values in reconstructed map".to_string(),
        ));
    }

    let flat: Vec<f32> = map.iter().copied().collect();
    let full = resize_f32_plane(&flat, n, n, width, height)?;
    Array2::from_shape_vec((height, width), full).map_err(Error::processing)
}

/// 3x3 box filter with clamped borders.
fn box_blur3(src: &Array2<f32>) -> Array2<f32> {
    let (rows, cols) = src.dim();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let mut sum = 0.0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                let rr = (r as i64 + dr).clamp(0, rows as i64 - 1) as usize;
                let cc = (c as i64 + dc).clamp(0, cols as i64 - 1) as usize;
                sum += src[[rr, cc]];
            }
        }
        sum / 9.0
    })
}

/// Separable Gaussian with clamped borders. A large sigma against a small
/// window behaves close to a box filter, which is the intended smoothing.
fn gaussian_blur(src: &Array2<f32>, radius: usize, sigma: f32) -> Array2<f32> {
    let mut kernel = Vec::with_capacity(2 * radius + 1);
    for i in 0..=2 * radius {
        let d = i as f32 - radius as f32;
        kernel.push((-d * d / (2.0 * sigma * sigma)).exp());
    }
    let norm: f32 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= norm;
    }

    let (rows, cols) = src.dim();
    let horizontal: Array2<f32> = Array2::from_shape_fn((rows, cols), |(r, c)| {
        kernel
            .iter()
            .enumerate()
            .map(|(i, &k)| {
                let cc = (c as i64 + i as i64 - radius as i64).clamp(0, cols as i64 - 1);
                k * src[[r, cc as usize]]
            })
            .sum()
    });
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        kernel
            .iter()
            .enumerate()
            .map(|(i, &k)| {
                let rr = (r as i64 + i as i64 - radius as i64).clamp(0, rows as i64 - 1);
                k * horizontal[[rr as usize, c]]
            })
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_rgb(width: usize, height: usize) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let v = ((x * 255 / width.max(1)) ^ (y * 7)) as u8;
                rgb.extend_from_slice(&[v, v / 2, 255 - v]);
            }
        }
        rgb
    }

    #[test]
    fn map_matches_source_dimensions() {
        let (w, h) = (120, 80);
        let map = estimate(&gradient_rgb(w, h), w, h).unwrap();
        assert_eq!(map.dim(), (h, w));
    }

    #[test]
    fn map_is_finite_and_non_negative() {
        let (w, h) = (64, 64);
        let map = estimate(&gradient_rgb(w, h), w, h).unwrap();
        assert!(map.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn estimation_is_deterministic() {
        let (w, h) = (90, 60);
        let rgb = gradient_rgb(w, h);
        let a = estimate(&rgb, w, h).unwrap();
        let b = estimate(&rgb, w, h).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn uniform_input_yields_a_flat_map() {
        // No spectral novelty anywhere: the map must be flat so the mask
        // empties out and the centroid falls back to the image center.
        let (w, h) = (64, 64);
        for fill in [0u8, 128, 255] {
            let rgb = vec![fill; w * h * 3];
            let map = estimate(&rgb, w, h).unwrap();
            assert!(map.iter().all(|&v| v == 0.0), "fill {fill} not flat");
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(estimate(&[], 0, 0).is_err());
    }

    #[test]
    fn luma_weights_sum_to_full_scale() {
        let white = rgb_to_luma(&[255, 255, 255]);
        assert!((white[0] - 255.0).abs() < 0.5);
        let black = rgb_to_luma(&[0, 0, 0]);
        assert_eq!(black[0], 0.0);
    }
}
