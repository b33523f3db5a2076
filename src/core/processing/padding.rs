use tracing::debug;

use crate::core::geometry::PadAmounts;

/// Surround an interleaved RGB8 buffer with a zero-valued (black) border.
/// Returns the padded buffer and its dimensions.
pub fn pad_rgb(
    rgb: &[u8],
    width: usize,
    height: usize,
    pad: &PadAmounts,
) -> (Vec<u8>, usize, usize) {
    let out_width = width + pad.left + pad.right;
    let out_height = height + pad.top + pad.bottom;

    debug!(
        "Adding padding: {}x{} -> {}x{} (top={} bottom={} left={} right={})",
        width, height, out_width, out_height, pad.top, pad.bottom, pad.left, pad.right
    );

    let mut padded = vec![0u8; out_width * out_height * 3];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..height {
        let src_offset = row * width * 3;
        let dst_offset = ((row + pad.top) * out_width + pad.left) * 3;
        padded[dst_offset..dst_offset + width * 3]
            .copy_from_slice(&rgb[src_offset..src_offset + width * 3]);
    }

    (padded, out_width, out_height)
}
