#![doc = r#"
salicrop — saliency-centered square cropping for image thumbnails.

This crate turns arbitrarily sized photographs into fixed-size square WebP
images centered on the most visually salient region. Saliency is estimated
with the spectral-residual method, binarized with Otsu's threshold, and the
mask's center of mass anchors an adaptively sized crop that is padded,
clamped in-bounds, and Lanczos-resized to the target. It powers the
`salicrop` and `salicrop-batch` CLIs and can be embedded in your own Rust
applications.

Quick start: crop a file
------------------------
```rust,no_run
use std::path::Path;
use salicrop::{CropParams, crop_salient_to_path};

fn main() -> salicrop::Result<()> {
    let params = CropParams { target_size: 1024, quality: 90.0 };
    crop_salient_to_path(
        Path::new("/photos/input.jpg"),
        Path::new("/out/input.webp"),
        &params,
    )
}
```

Process in-memory to `CroppedImage`
-----------------------------------
```rust,no_run
use std::path::Path;
use salicrop::{CropParams, crop_salient_to_buffer};

fn main() -> salicrop::Result<()> {
    let img = crop_salient_to_buffer(Path::new("/photos/input.jpg"), &CropParams::default())?;
    assert_eq!(img.rgb.len(), img.width * img.height * 3);
    Ok(())
}
```

Batch helper
------------
```rust,no_run
use std::path::Path;
use salicrop::{CropParams, process_directory};

fn main() -> salicrop::Result<()> {
    let report = process_directory(
        Path::new("/photos"),
        &CropParams::default(),
        true, // continue_on_error
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `salicrop::Result<T>`; match on `salicrop::Error`
to handle specific cases, e.g. undecodable sources or unwritable outputs.
A uniform or pure-black image is not an error: its empty saliency mask falls
back to a centered crop by design.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — saliency, mask, moments, geometry, and pipeline primitives.
- [`io`] — decoding and WebP writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
pub use crate::core::geometry::{CropPlan, CropRect, PadAmounts};
pub use crate::core::params::CropParams;
pub use crate::error::{Error, Result};

// High-level API re-exports
pub use crate::api::{
    BatchReport, CroppedImage, crop_salient_to_buffer, crop_salient_to_path, process_directory,
};
