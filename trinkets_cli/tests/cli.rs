use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(binary: &str, args: &[&str]) -> Output {
    Command::new(binary).args(args).output().expect("failed to spawn binary")
}

fn write_checkerboard(dir: &Path) -> PathBuf {
    let path = dir.join("input.png");
    let image = RgbImage::from_fn(4, 4, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([200, 100, 0])
        } else {
            Rgb([0, 50, 255])
        }
    });
    image.save(&path).expect("failed to write fixture");
    path
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn workdir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn pixelate_writes_block_means() {
    let dir = workdir();
    let input = write_checkerboard(dir.path());
    let output = dir.path().join("out.png");

    let result = run(
        env!("CARGO_BIN_EXE_pixelate"),
        &[input.to_str().unwrap(), output.to_str().unwrap(), "-b", "2"],
    );

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    let pixelated = image::open(&output).unwrap().to_rgb8();
    assert_eq!(pixelated.dimensions(), (4, 4));
    assert!(pixelated.pixels().all(|p| *p == Rgb([100, 75, 127])));
}

#[test]
fn pixelate_rejects_zero_block_size_without_output() {
    let dir = workdir();
    let input = write_checkerboard(dir.path());
    let output = dir.path().join("out.png");

    let result = run(
        env!("CARGO_BIN_EXE_pixelate"),
        &[input.to_str().unwrap(), output.to_str().unwrap(), "--block-size", "0"],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("positive integer"));
    assert!(!output.exists());
}

#[test]
fn pixelate_requires_block_size() {
    let dir = workdir();
    let input = write_checkerboard(dir.path());
    let output = dir.path().join("out.png");

    let result = run(
        env!("CARGO_BIN_EXE_pixelate"),
        &[input.to_str().unwrap(), output.to_str().unwrap()],
    );

    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn resize_zero_factor_is_reported() {
    let dir = workdir();
    let input = write_checkerboard(dir.path());
    let output = dir.path().join("small.png");

    let result = run(
        env!("CARGO_BIN_EXE_resize"),
        &[input.to_str().unwrap(), output.to_str().unwrap(), "0"],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("factor cannot be zero"));
    assert!(!output.exists());
}

#[test]
fn resize_missing_input_is_not_found() {
    let dir = workdir();
    let input = dir.path().join("missing.png");
    let output = dir.path().join("small.png");

    let result = run(
        env!("CARGO_BIN_EXE_resize"),
        &[input.to_str().unwrap(), output.to_str().unwrap(), "2"],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("not found"));
    assert!(!output.exists());
}

#[test]
fn resize_halves_dimensions() {
    let dir = workdir();
    let input = write_checkerboard(dir.path());
    let output = dir.path().join("small.png");

    let result = run(
        env!("CARGO_BIN_EXE_resize"),
        &[input.to_str().unwrap(), output.to_str().unwrap(), "2"],
    );

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    assert_eq!(image::open(&output).unwrap().into_rgb8().dimensions(), (2, 2));
    assert!(String::from_utf8_lossy(&result.stdout).contains("small.png"));
}

#[test]
fn sort_image_orders_pixels_in_scan_order() {
    let dir = workdir();
    let input = write_checkerboard(dir.path());
    let output = dir.path().join("sorted.png");

    let result = run(
        env!("CARGO_BIN_EXE_sort_image"),
        &[input.to_str().unwrap(), output.to_str().unwrap()],
    );

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    let sorted = image::open(&output).unwrap().to_rgb8();
    let pixels: Vec<Rgb<u8>> = sorted.pixels().copied().collect();
    assert_eq!(&pixels[..8], &[Rgb([0, 50, 255]); 8]);
    assert_eq!(&pixels[8..], &[Rgb([200, 100, 0]); 8]);
}

#[test]
fn sort_image_rejects_undecodable_input() {
    let dir = workdir();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"not an image").unwrap();
    let output = dir.path().join("sorted.png");

    let result = run(
        env!("CARGO_BIN_EXE_sort_image"),
        &[input.to_str().unwrap(), output.to_str().unwrap()],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).starts_with("Error: "));
    assert!(!output.exists());
}
