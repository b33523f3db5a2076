//! End-to-end pipeline tests: decode -> salient crop -> WebP on disk.

use std::path::Path;

use image::{Rgb, RgbImage};
use salicrop::{CropParams, crop_salient_to_buffer, crop_salient_to_path};
use tempfile::tempdir;

fn params(size: usize) -> CropParams {
    CropParams {
        target_size: size,
        ..CropParams::default()
    }
}

/// Dark field with a bright block in the upper-left quadrant.
fn write_spot_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let in_spot =
            x >= width / 4 && x < width / 4 + width / 8 && y >= height / 4 && y < height / 4 + height / 8;
        if in_spot {
            Rgb([250, 240, 230])
        } else {
            Rgb([12, 12, 12])
        }
    });
    img.save(path).unwrap();
}

#[test]
fn output_is_square_rgb_at_target_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("spot.jpg");
    let output = dir.path().join("spot.webp");
    write_spot_jpeg(&input, 200, 160);

    crop_salient_to_path(&input, &output, &params(64)).unwrap();

    let decoded = image::open(&output).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (64, 64));
}

#[test]
fn small_sources_are_padded_not_upscaled() {
    // 100x100 with target 256: the crop plan pads to exactly 256x256 and the
    // compositor slices it whole, no resize involved.
    let dir = tempdir().unwrap();
    let input = dir.path().join("small.jpg");
    let output = dir.path().join("small.webp");
    write_spot_jpeg(&input, 100, 100);

    crop_salient_to_path(&input, &output, &params(256)).unwrap();

    let decoded = image::open(&output).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (256, 256));
}

#[test]
fn pipeline_is_deterministic_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("spot.jpg");
    write_spot_jpeg(&input, 180, 140);

    let a = crop_salient_to_buffer(&input, &params(48)).unwrap();
    let b = crop_salient_to_buffer(&input, &params(48)).unwrap();
    assert_eq!(a.rgb, b.rgb);
    assert_eq!((a.width, a.height), (48, 48));
}

#[test]
fn all_black_source_uses_center_fallback() {
    // Uniform input survives the whole pipeline through the centroid
    // fallback and yields a black square of the right size.
    let dir = tempdir().unwrap();
    let input = dir.path().join("black.jpg");
    let output = dir.path().join("black.webp");
    RgbImage::from_pixel(160, 160, Rgb([0, 0, 0]))
        .save(&input)
        .unwrap();

    crop_salient_to_path(&input, &output, &params(64)).unwrap();

    let decoded = image::open(&output).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (64, 64));
    // Lossy encoding of a constant black frame stays essentially black
    assert!(decoded.pixels().all(|p| p[0] < 8 && p[1] < 8 && p[2] < 8));
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("spot.jpg");
    let output = dir.path().join("out.webp");
    write_spot_jpeg(&input, 150, 150);
    std::fs::write(&output, b"stale contents").unwrap();

    crop_salient_to_path(&input, &output, &params(64)).unwrap();

    let decoded = image::open(&output).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (64, 64));
}

#[test]
fn missing_input_is_a_load_error() {
    let dir = tempdir().unwrap();
    let err = crop_salient_to_buffer(&dir.path().join("absent.jpg"), &params(64)).unwrap_err();
    assert!(matches!(err, salicrop::Error::Decode { .. }));
}

#[test]
fn zero_size_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("spot.jpg");
    write_spot_jpeg(&input, 100, 100);
    let err = crop_salient_to_buffer(&input, &params(0)).unwrap_err();
    assert!(matches!(err, salicrop::Error::ZeroSize { .. }));
}
