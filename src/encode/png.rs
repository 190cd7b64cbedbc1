use std::path::Path;

use image::ImageEncoder as _;

use crate::foundation::error::{RepixError, RepixResult};
use crate::render::raster::RasterImage;

/// Serialize `img` as an 8-bit RGB PNG.
#[tracing::instrument(level = "debug", skip(img), fields(width = img.width, height = img.height))]
pub fn encode_png(img: &RasterImage) -> RepixResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(&img.data, img.width, img.height, image::ExtendedColorType::Rgb8)
        .map_err(|e| RepixError::encode(format!("png encode failed: {e}")))?;
    tracing::debug!(bytes = out.len(), "png encoded");
    Ok(out)
}

/// Decode PNG bytes into an RGB8 buffer.
pub fn decode_png(bytes: &[u8]) -> RepixResult<image::RgbImage> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| RepixError::encode(format!("png decode failed: {e}")))?;
    Ok(img.to_rgb8())
}

/// Encode `img` and write it to `path`, creating missing parent directories.
pub fn write_png(path: &Path, img: &RasterImage) -> RepixResult<()> {
    let png = encode_png(img)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, png)
        .map_err(|e| RepixError::io(format!("write png '{}': {e}", path.display())))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> RepixResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            RepixError::io(format!("create output directory '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
