//! Core processing building blocks: crop geometry, saliency estimation,
//! mask binarization, image moments, and the per-image pipeline. These are
//! internal primitives consumed by the high-level `api` module.
pub mod geometry;
pub mod mask;
pub mod moments;
pub mod params;
pub mod processing;
pub mod saliency;
