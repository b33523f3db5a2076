//! Buffer-level processing primitives: zero-border padding, resampling, and
//! the per-image salient-crop pipeline.
pub mod padding;
pub mod pipeline;
pub mod resize;
