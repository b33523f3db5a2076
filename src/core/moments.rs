//! Image moments over the binary mask and the salient centroid.

/// Center of mass of the foreground pixels, treating mask intensity as a
/// 0/1 indicator (m00 = count, m10 = sum of x, m01 = sum of y).
///
/// An empty mask falls back to the geometric center `(width / 2, height / 2)`.
/// The fallback is deliberate, not an error: uniform or pure-black images end
/// up here after thresholding.
pub fn centroid(mask: &[u8], width: usize, height: usize) -> (usize, usize) {
    let mut m00: u64 = 0;
    let mut m10: u64 = 0;
    let mut m01: u64 = 0;

    for y in 0..height {
        let row = &mask[y * width..(y + 1) * width];
        for (x, &v) in row.iter().enumerate() {
            if v > 0 {
                m00 += 1;
                m10 += x as u64;
                m01 += y as u64;
            }
        }
    }

    if m00 == 0 {
        return (width / 2, height / 2);
    }

    let cx = (m10 as f64 / m00 as f64).round() as usize;
    let cy = (m01 as f64 / m00 as f64).round() as usize;
    (cx, cy)
}

#[cfg(test)]
mod tests {
    use super::centroid;

    #[test]
    fn empty_mask_falls_back_to_center() {
        let mask = vec![0u8; 7 * 5];
        assert_eq!(centroid(&mask, 7, 5), (3, 2));
    }

    #[test]
    fn single_pixel_is_its_own_centroid() {
        let mut mask = vec![0u8; 8 * 8];
        mask[3 * 8 + 5] = 255;
        assert_eq!(centroid(&mask, 8, 8), (5, 3));
    }

    #[test]
    fn block_centroid_lands_in_the_middle() {
        // 3x3 block with top-left corner at (2, 1)
        let mut mask = vec![0u8; 10 * 10];
        for y in 1..4 {
            for x in 2..5 {
                mask[y * 10 + x] = 255;
            }
        }
        assert_eq!(centroid(&mask, 10, 10), (3, 2));
    }

    #[test]
    fn fractional_moments_round_to_nearest() {
        // Foreground at x = 0 and x = 1: mean x = 0.5, rounds up to 1
        let mut mask = vec![0u8; 4];
        mask[0] = 255;
        mask[1] = 255;
        assert_eq!(centroid(&mask, 4, 1), (1, 0));
    }

    #[test]
    fn intensity_does_not_weight_the_centroid() {
        // Any nonzero value counts as one foreground pixel
        let mut a = vec![0u8; 9];
        let mut b = vec![0u8; 9];
        a[4] = 255;
        a[5] = 255;
        b[4] = 1;
        b[5] = 200;
        assert_eq!(centroid(&a, 3, 3), centroid(&b, 3, 3));
    }
}
