use crate::foundation::core::{LogicalSize, Rgb8};
use crate::pixmap::model::PixelMap;

const CHANNELS: usize = 3;

/// An upscaled image as RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Bounds of the source map in logical pixels.
    pub logical: LogicalSize,
    /// Side length, in output pixels, of one logical pixel's block. Always >= 1.
    pub scale_factor: u32,
    /// Output width in pixels (`logical.width * scale_factor`).
    pub width: u32,
    /// Output height in pixels (`logical.height * scale_factor`).
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Color of output pixel `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }
}

/// Rasterize `map` into a black canvas, one solid `scale_factor` square per entry.
///
/// Blocks of distinct coordinates are disjoint, so the result does not depend on the order
/// entries are visited in.
#[tracing::instrument(level = "debug", skip(map), fields(pixels = map.len()))]
pub fn rasterize(map: &PixelMap) -> RasterImage {
    let logical = map.size();
    let scale = map.scale_factor();
    let (width, height) = logical.scaled(scale);
    tracing::debug!(scale, width, height, "allocating canvas");

    let stride = width as usize * CHANNELS;
    // All-zero bytes are the black background.
    let mut data = vec![0u8; stride * height as usize];

    let block = scale as usize;
    for (coord, color) in map.iter() {
        let rgb = color.to_array();
        let x0 = coord.x as usize * block;
        let y0 = coord.y as usize * block;
        for row in y0..y0 + block {
            let start = row * stride + x0 * CHANNELS;
            let span = &mut data[start..start + block * CHANNELS];
            for px in span.chunks_exact_mut(CHANNELS) {
                px.copy_from_slice(&rgb);
            }
        }
    }

    RasterImage {
        logical,
        scale_factor: scale,
        width,
        height,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
