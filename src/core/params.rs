use serde::{Deserialize, Serialize};

/// Cropping parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropParams {
    /// Edge length of the square output in pixels
    pub target_size: usize,
    /// WebP quality factor in [0, 100]
    pub quality: f32,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            target_size: 1024,
            quality: 90.0,
        }
    }
}
