//! Repix turns a sparse, coordinate-keyed pixel description into an upscaled PNG.
//!
//! # Input
//!
//! ```json
//! { "pixels": { "0,0": [255, 0, 0], "1,0": [0, 255, 0] } }
//! ```
//!
//! Keys are `"<x>,<y>"` logical coordinates, values are `[r, g, b]` channels in `0..=255`.
//! Coordinates that are not listed are black.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `bytes -> PixelMap` ([`validate_and_parse`]), rejecting bad documents
//!    with a [`ValidationError`]
//! 2. **Rasterize**: `PixelMap -> RasterImage` ([`rasterize`]); the logical canvas is
//!    magnified by the largest integer factor that keeps both sides within
//!    [`MAX_OUTPUT_DIM`] pixels, and every logical pixel becomes a solid square block
//! 3. **Encode**: `RasterImage -> PNG bytes` ([`encode_png`])
//!
//! [`convert`] runs all three; [`convert_batch`] runs them over several documents
//! independently.
//!
//! Every step is a pure function of its arguments. The only functions that touch the
//! filesystem are [`write_png`] and [`ensure_parent_dir`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod pixmap;

/// PNG output.
pub mod encode;
/// Rasterization and the conversion pipeline.
pub mod render;

pub use encode::png::{decode_png, encode_png, ensure_parent_dir, write_png};
pub use foundation::core::{Coord, LogicalSize, MAX_OUTPUT_DIM, Rgb8};
pub use foundation::error::{RepixError, RepixResult, ValidationError};
pub use pixmap::model::PixelMap;
pub use pixmap::validate::{parse_coord, validate, validate_and_parse};
pub use render::pipeline::{
    BatchInput, BatchOutcome, BatchStats, EncodedImage, ImageInfo, convert, convert_batch,
    output_file_name,
};
pub use render::raster::{RasterImage, rasterize};
