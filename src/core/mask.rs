//! Saliency-map binarization: linear rescaling into the 8-bit range followed
//! by Otsu's automatic global threshold. Deterministic, no side effects.

use ndarray::Array2;

/// Min-max normalize the map to [0, 1], scale by 255 and truncate to u8.
///
/// A flat map (zero range) quantizes to all zeros, which downstream code
/// treats as an empty mask rather than an error.
pub fn quantize(map: &Array2<f32>) -> Vec<u8> {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in map.iter() {
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if !(range > 0.0) {
        return vec![0u8; map.len()];
    }

    map.iter().map(|&v| ((v - min) / range * 255.0) as u8).collect()
}

/// Otsu's threshold over the 256-bin histogram: the cut that maximizes
/// between-class variance (equivalently, minimizes intra-class variance).
/// Pixels strictly above the returned level are foreground.
pub fn otsu_level(pixels: &[u8]) -> u8 {
    let mut hist = [0u64; 256];
    for &p in pixels {
        hist[p as usize] += 1;
    }

    let total = pixels.len() as f64;
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg = 0.0;
    let mut sum_bg = 0.0;
    let mut best_level = 0u8;
    let mut best_variance = 0.0;

    for level in 0..256usize {
        weight_bg += hist[level] as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += level as f64 * hist[level] as f64;

        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between = weight_bg * weight_fg * (mean_bg - mean_fg) * (mean_bg - mean_fg);
        if between > best_variance {
            best_variance = between;
            best_level = level as u8;
        }
    }

    best_level
}

/// Binarize a saliency map into a {0, 255} foreground mask.
pub fn binarize(map: &Array2<f32>) -> Vec<u8> {
    let gray = quantize(map);
    let level = otsu_level(&gray);
    gray.iter()
        .map(|&v| if v > level { 255 } else { 0 })
        .collect()
}
