use std::path::PathBuf;

use super::*;
use crate::foundation::core::{Coord, Rgb8};
use crate::pixmap::model::PixelMap;
use crate::render::raster::rasterize;

fn sample() -> RasterImage {
    let map = PixelMap::from_entries([
        (Coord::new(0, 0), Rgb8::new(255, 0, 0)),
        (Coord::new(1, 1), Rgb8::new(0, 0, 255)),
    ])
    .unwrap();
    rasterize(&map)
}

#[test]
fn png_decodes_to_the_same_pixels() {
    let img = sample();
    let png = encode_png(&img).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = decode_png(&png).unwrap();
    assert_eq!(decoded.dimensions(), (img.width, img.height));
    assert_eq!(decoded.as_raw(), &img.data);
}

#[test]
fn encoding_is_deterministic() {
    let img = sample();
    assert_eq!(encode_png(&img).unwrap(), encode_png(&img).unwrap());
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_png(b"definitely not a png").unwrap_err();
    assert!(err.to_string().contains("encode error:"));
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = PathBuf::from("target").join("png_unit").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.png");

    let img = sample();
    write_png(&path, &img).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let decoded = decode_png(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (2000, 2000));
    assert_eq!(decoded.get_pixel(1999, 1999).0, [0, 0, 255]);
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    ensure_parent_dir(std::path::Path::new("out.png")).unwrap();
}

#[test]
fn io_failures_surface_as_io_errors() {
    let dir = PathBuf::from("target").join("png_unit").join("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, b"file").unwrap();

    // The parent of the output is a regular file, so the directory cannot be created.
    let err = write_png(&blocker.join("sub").join("out.png"), &sample()).unwrap_err();
    assert!(matches!(err, RepixError::Io(_)), "{err}");

    // The output path itself is a directory, so the file cannot be written.
    let err = write_png(&dir, &sample()).unwrap_err();
    assert!(matches!(err, RepixError::Io(_)), "{err}");
}
