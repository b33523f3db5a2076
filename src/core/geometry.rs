//! Crop geometry: adaptive crop size, symmetric zero-padding amounts, and
//! centroid-anchored placement with boundary clamping.
//!
//! The crop size is the larger of the requested target and 80% of the shorter
//! source side. Dimensions shorter than the crop size receive a symmetric
//! black border before any analysis runs, so saliency, mask, and centroid all
//! operate in padded coordinates.

/// Square crop region in padded-image coordinates.
///
/// Invariant: `x + size <= padded width` and `y + size <= padded height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

/// Border widths added to each side, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PadAmounts {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl PadAmounts {
    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }
}

/// Crop size and padding derived from the source dimensions.
#[derive(Copy, Clone, Debug)]
pub struct CropPlan {
    /// Edge of the square region cut from the padded image. May exceed the
    /// target size; the compositor resizes afterwards.
    pub crop_size: usize,
    pub pad: PadAmounts,
    pub padded_width: usize,
    pub padded_height: usize,
}

impl CropPlan {
    /// Derive the crop size and padding for a `width` x `height` source.
    pub fn new(width: usize, height: usize, target_size: usize) -> Self {
        let crop_size = target_size.max(width.min(height) * 4 / 5);

        let mut pad = PadAmounts::default();
        if height < crop_size {
            pad.top = (crop_size - height) / 2;
            pad.bottom = crop_size - height - pad.top;
        }
        if width < crop_size {
            pad.left = (crop_size - width) / 2;
            pad.right = crop_size - width - pad.left;
        }

        CropPlan {
            crop_size,
            pad,
            padded_width: width + pad.left + pad.right,
            padded_height: height + pad.top + pad.bottom,
        }
    }

    /// Anchor the square on the centroid, clamped so it never leaves the
    /// padded image. Near edges the region is not exactly centered.
    pub fn locate(&self, cx: usize, cy: usize) -> CropRect {
        let half = (self.crop_size / 2) as i64;
        let x = clamp(cx as i64 - half, 0, (self.padded_width - self.crop_size) as i64);
        let y = clamp(cy as i64 - half, 0, (self.padded_height - self.crop_size) as i64);
        CropRect {
            x: x as usize,
            y: y as usize,
            size: self.crop_size,
        }
    }
}

fn clamp(v: i64, lower: i64, upper: i64) -> i64 {
    v.min(upper).max(lower)
}
