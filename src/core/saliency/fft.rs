//! Iterative radix-2 transforms for the square spectral-analysis grid.

use ndarray::Array2;
use num_complex::Complex;

/// In-place Cooley-Tukey FFT. `buf.len()` must be a power of two; the inverse
/// transform applies the 1/N scale so a forward/inverse pair is the identity.
pub fn fft_inplace(buf: &mut [Complex<f32>], inverse: bool) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    // Bit-reversal permutation
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            buf.swap(i, j);
        }
    }

    let sign = if inverse { 1.0 } else { -1.0 };
    let mut len = 2;
    while len <= n {
        let angle = sign * 2.0 * std::f32::consts::PI / len as f32;
        let w_len = Complex::from_polar(1.0, angle);
        for start in (0..n).step_by(len) {
            let mut w = Complex::new(1.0, 0.0);
            for k in 0..len / 2 {
                let a = buf[start + k];
                let b = buf[start + k + len / 2] * w;
                buf[start + k] = a + b;
                buf[start + k + len / 2] = a - b;
                w *= w_len;
            }
        }
        len <<= 1;
    }

    if inverse {
        let scale = 1.0 / n as f32;
        for v in buf.iter_mut() {
            *v *= scale;
        }
    }
}

/// 2-D transform: one pass over the rows, one over the columns.
pub fn fft2(grid: &mut Array2<Complex<f32>>, inverse: bool) {
    let (rows, cols) = grid.dim();
    let mut buf = vec![Complex::new(0.0f32, 0.0); rows.max(cols)];

    for r in 0..rows {
        for c in 0..cols {
            buf[c] = grid[[r, c]];
        }
        fft_inplace(&mut buf[..cols], inverse);
        for c in 0..cols {
            grid[[r, c]] = buf[c];
        }
    }

    for c in 0..cols {
        for r in 0..rows {
            buf[r] = grid[[r, c]];
        }
        fft_inplace(&mut buf[..rows], inverse);
        for r in 0..rows {
            grid[[r, c]] = buf[r];
        }
    }
}
