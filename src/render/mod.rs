/// Batch and one-shot conversion helpers.
pub mod pipeline;
/// Block rasterizer.
pub mod raster;
