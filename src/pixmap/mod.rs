//! Input side of the pipeline: the [`PixelMap`](model::PixelMap) model and the validator that
//! builds it from uploaded bytes.

pub(crate) mod model;
pub(crate) mod validate;
