use std::path::{Path, PathBuf};

use super::*;

fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(width, height, image::Rgba(color))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn solid_image_has_every_pixel() {
    let img = ImageData::solid(3, 2, [1, 2, 3, 4]);
    assert_eq!(img.rgba.len(), 24);
    assert_eq!(&img.rgba[20..24], &[1, 2, 3, 4]);
}

#[test]
fn load_png_as_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "a.png", 4, 2, [255, 0, 0, 255]);
    let img = load_image(&path).unwrap();
    assert_eq!((img.width, img.height), (4, 2));
    assert_eq!(img.rgba.len(), 4 * 2 * 4);
    assert_eq!(&img.rgba[..4], &[255, 0, 0, 255]);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_image(Path::new("/nonexistent/fractals/ground.png")).unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
    assert!(err.to_string().contains("ground.png"));
}

#[test]
fn garbage_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(
        load_image(&path).unwrap_err(),
        AssetError::Decode { .. }
    ));
}

#[test]
fn fallback_on_failure() {
    let img = load_image_or_fallback(Path::new("/nonexistent/texture.jpg"));
    assert_eq!(img, ImageData::fallback());
    assert_eq!(img.rgba, FALLBACK_GRAY.to_vec());
}

#[test]
fn cubemap_all_faces_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths: [PathBuf; 6] =
        std::array::from_fn(|i| write_png(dir.path(), &format!("{i}.png"), 8, 8, [i as u8, 0, 0, 255]));
    let cube = load_cubemap(&paths);
    assert_eq!(cube.size, 8);
    for (i, face) in cube.faces.iter().enumerate() {
        assert_eq!(face.len(), 8 * 8 * 4);
        assert_eq!(face[0], i as u8);
    }
    assert_eq!(cube.layer_bytes().len(), 6 * 8 * 8 * 4);
}

#[test]
fn cubemap_missing_face_is_gray() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths: [PathBuf; 6] =
        std::array::from_fn(|i| write_png(dir.path(), &format!("{i}.png"), 4, 4, [200, 10, 10, 255]));
    paths[3] = dir.path().join("missing.png");
    let cube = load_cubemap(&paths);
    assert_eq!(cube.size, 4);
    assert_eq!(&cube.faces[3][..4], &FALLBACK_GRAY);
    assert_eq!(cube.faces[3].len(), 4 * 4 * 4);
    assert_eq!(cube.faces[0][0], 200);
}

#[test]
fn cubemap_mismatched_face_is_gray() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths: [PathBuf; 6] =
        std::array::from_fn(|i| write_png(dir.path(), &format!("{i}.png"), 4, 4, [9, 9, 9, 255]));
    paths[5] = write_png(dir.path(), "big.png", 16, 16, [1, 1, 1, 255]);
    let cube = load_cubemap(&paths);
    assert_eq!(cube.size, 4);
    assert_eq!(cube.faces[5].len(), 4 * 4 * 4);
    assert_eq!(&cube.faces[5][..4], &FALLBACK_GRAY);
}

#[test]
fn cubemap_with_no_faces_is_one_pixel() {
    let paths = ["a", "b", "c", "d", "e", "f"].map(|n| format!("/nonexistent/{n}.jpg"));
    let cube = load_cubemap(&paths);
    assert_eq!(cube.size, 1);
    assert!(cube.faces.iter().all(|f| f == &FALLBACK_GRAY.to_vec()));
}
