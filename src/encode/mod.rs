//! Output side of the pipeline: PNG serialization of a [`RasterImage`](crate::RasterImage).

/// PNG encoding, decoding and file output.
pub mod png;
