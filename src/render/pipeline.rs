use std::path::Path;

use crate::{
    encode::png::encode_png,
    foundation::core::LogicalSize,
    foundation::error::{RepixError, RepixResult},
    pixmap::model::PixelMap,
    pixmap::validate::validate_and_parse,
    render::raster::rasterize,
};

/// Dimensions of the image a [`PixelMap`] renders to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ImageInfo {
    /// Bounds in logical pixels.
    pub logical: LogicalSize,
    /// Output pixels per logical pixel, per axis.
    pub scale_factor: u32,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of logical pixels with an explicit color.
    pub pixels: usize,
}

impl ImageInfo {
    /// Compute the output dimensions for `map` without rendering it.
    pub fn of(map: &PixelMap) -> Self {
        let logical = map.size();
        let scale_factor = map.scale_factor();
        let (width, height) = logical.scaled(scale_factor);
        Self {
            logical,
            scale_factor,
            width,
            height,
            pixels: map.len(),
        }
    }
}

/// A PNG-encoded result plus its dimensions for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// PNG file bytes.
    pub png: Vec<u8>,
    /// Dimensions of the encoded image.
    pub info: ImageInfo,
}

/// Validate + rasterize + encode one uploaded document.
///
/// This is the one-shot entry point for a caller holding raw upload bytes.
pub fn convert(bytes: &[u8]) -> RepixResult<EncodedImage> {
    let map = validate_and_parse(bytes)?;
    let img = rasterize(&map);
    let png = encode_png(&img)?;
    Ok(EncodedImage {
        png,
        info: ImageInfo::of(&map),
    })
}

/// Download name for the `index`-th (0-based) image of a batch.
pub fn output_file_name(index: usize) -> String {
    format!("repix_nft_{}.png", index + 1)
}

/// One named document of a batch.
#[derive(Debug)]
pub struct BatchInput {
    /// Display name, usually the source file name.
    pub name: String,
    /// Raw document bytes, or why they could not be obtained.
    pub bytes: RepixResult<Vec<u8>>,
}

impl BatchInput {
    /// Wrap bytes that are already in memory.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: Ok(bytes.into()),
        }
    }

    /// Read `path`. A read failure is kept in the input and reported by [`convert_batch`] as
    /// that input's outcome.
    pub fn read(path: &Path) -> Self {
        let bytes = std::fs::read(path)
            .map_err(|e| RepixError::io(format!("read pixel data '{}': {e}", path.display())));
        Self {
            name: path.display().to_string(),
            bytes,
        }
    }
}

/// Result of converting one [`BatchInput`].
#[derive(Debug)]
pub struct BatchOutcome {
    /// Name of the input this outcome belongs to.
    pub name: String,
    /// Download name assigned from the input's position.
    pub file_name: String,
    /// The converted image, or why this input failed.
    pub result: RepixResult<EncodedImage>,
}

/// Counters over a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Inputs seen.
    pub total: usize,
    /// Inputs converted successfully.
    pub converted: usize,
    /// Inputs that failed.
    pub failed: usize,
}

impl BatchStats {
    /// Tally a list of outcomes.
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let converted = outcomes.iter().filter(|o| o.result.is_ok()).count();
        Self {
            total: outcomes.len(),
            converted,
            failed: outcomes.len() - converted,
        }
    }
}

/// Convert every input independently, in order.
///
/// A failing input is recorded in its outcome and does not stop the rest of the batch.
pub fn convert_batch<I>(inputs: I) -> Vec<BatchOutcome>
where
    I: IntoIterator<Item = BatchInput>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            let result = input.bytes.and_then(|bytes| convert(&bytes));
            if let Err(e) = &result {
                tracing::debug!(name = %input.name, error = %e, "batch input failed");
            }
            BatchOutcome {
                name: input.name,
                file_name: output_file_name(i),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
