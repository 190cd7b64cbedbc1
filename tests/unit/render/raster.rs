use super::*;
use crate::foundation::core::Coord;

fn map(entries: &[((u32, u32), [u8; 3])]) -> PixelMap {
    PixelMap::from_entries(
        entries
            .iter()
            .map(|&((x, y), rgb)| (Coord::new(x, y), Rgb8::from(rgb))),
    )
    .unwrap()
}

fn assert_blocks_match(map: &PixelMap, img: &RasterImage) {
    let s = img.scale_factor;
    for y in 0..img.height {
        for x in 0..img.width {
            let expected = map
                .get(Coord::new(x / s, y / s))
                .unwrap_or(Rgb8::BLACK);
            assert_eq!(img.pixel(x, y), Some(expected), "pixel ({x},{y})");
        }
    }
}

#[test]
fn two_pixel_row_scales_to_2000_by_1000() {
    let m = map(&[((0, 0), [255, 0, 0]), ((1, 0), [0, 255, 0])]);
    let img = rasterize(&m);

    assert_eq!(
        img.logical,
        LogicalSize {
            width: 2,
            height: 1
        }
    );
    assert_eq!(img.scale_factor, 1000);
    assert_eq!((img.width, img.height), (2000, 1000));
    assert_eq!(img.data.len(), 2000 * 1000 * CHANNELS);

    let red = Some(Rgb8::new(255, 0, 0));
    let green = Some(Rgb8::new(0, 255, 0));
    assert_eq!(img.pixel(0, 0), red);
    assert_eq!(img.pixel(999, 999), red);
    assert_eq!(img.pixel(1000, 0), green);
    assert_eq!(img.pixel(1999, 999), green);
}

#[test]
fn sparse_map_leaves_missing_blocks_black() {
    let m = map(&[((2, 2), [1, 2, 3])]);
    let img = rasterize(&m);

    assert_eq!(img.scale_factor, 666);
    assert_eq!((img.width, img.height), (1998, 1998));

    let c = Some(Rgb8::new(1, 2, 3));
    assert_eq!(img.pixel(1332, 1332), c);
    assert_eq!(img.pixel(1997, 1997), c);
    assert_eq!(img.pixel(1331, 1332), Some(Rgb8::BLACK));
    assert_eq!(img.pixel(1332, 1331), Some(Rgb8::BLACK));
    assert_eq!(img.pixel(0, 0), Some(Rgb8::BLACK));
}

#[test]
fn every_output_pixel_belongs_to_its_block() {
    let m = map(&[
        ((0, 0), [10, 20, 30]),
        ((2, 1), [200, 100, 50]),
        ((1, 3), [0, 0, 255]),
    ]);
    let img = rasterize(&m);

    assert_eq!(img.scale_factor, 500);
    assert_eq!((img.width, img.height), (1500, 2000));
    assert_blocks_match(&m, &img);
}

#[test]
fn side_of_exactly_2000_is_not_scaled() {
    let m = map(&[((1999, 0), [9, 9, 9]), ((0, 0), [1, 1, 1])]);
    let img = rasterize(&m);

    assert_eq!(img.scale_factor, 1);
    assert_eq!((img.width, img.height), (2000, 1));
    assert_eq!(img.pixel(1999, 0), Some(Rgb8::new(9, 9, 9)));
    assert_eq!(img.pixel(1, 0), Some(Rgb8::BLACK));
    assert_blocks_match(&m, &img);
}

#[test]
fn output_is_deterministic_and_order_independent() {
    let entries = [
        ((3, 0), [1, 2, 3]),
        ((0, 4), [4, 5, 6]),
        ((2, 2), [7, 8, 9]),
        ((0, 0), [10, 11, 12]),
    ];
    let mut reversed = entries;
    reversed.reverse();

    let a = rasterize(&map(&entries));
    let b = rasterize(&map(&entries));
    let c = rasterize(&map(&reversed));
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn pixel_outside_the_image_is_none() {
    let img = rasterize(&map(&[((0, 0), [1, 1, 1])]));
    assert_eq!((img.width, img.height), (2000, 2000));
    assert_eq!(img.pixel(2000, 0), None);
    assert_eq!(img.pixel(0, 2000), None);
    assert_eq!(img.pixel(1999, 1999), Some(Rgb8::new(1, 1, 1)));
}
