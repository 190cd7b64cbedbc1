use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::foundation::core::{Coord, LogicalSize, MAX_OUTPUT_DIM, Rgb8};
use crate::foundation::error::ValidationError;

/// Sparse description of a logical image: coordinate to color.
///
/// Coordinates that are not present render as background black. A `PixelMap` is always
/// non-empty, holds at most one color per coordinate, and fits within [`MAX_OUTPUT_DIM`] on
/// both axes, so [`PixelMap::scale_factor`] is at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMap {
    pixels: BTreeMap<Coord, Rgb8>,
    size: LogicalSize,
}

impl PixelMap {
    /// Build a map from `(coord, color)` pairs.
    ///
    /// Fails with [`ValidationError::EmptyPixelData`] for no entries,
    /// [`ValidationError::DuplicateCoordinate`] when a coordinate repeats and
    /// [`ValidationError::DegenerateScale`] when the bounds exceed the output cap.
    pub fn from_entries<I>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (Coord, Rgb8)>,
    {
        let mut pixels = BTreeMap::new();
        let mut max_x = 0u32;
        let mut max_y = 0u32;

        for (coord, color) in entries {
            match pixels.entry(coord) {
                Entry::Occupied(_) => {
                    return Err(ValidationError::DuplicateCoordinate(coord.to_string()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(color);
                }
            }
            max_x = max_x.max(coord.x);
            max_y = max_y.max(coord.y);
        }

        if pixels.is_empty() {
            return Err(ValidationError::EmptyPixelData);
        }

        let width = u64::from(max_x) + 1;
        let height = u64::from(max_y) + 1;
        let max = u64::from(MAX_OUTPUT_DIM);
        if width > max || height > max {
            return Err(ValidationError::DegenerateScale {
                width,
                height,
                max: MAX_OUTPUT_DIM,
            });
        }

        Ok(Self {
            pixels,
            // Both fit in u32: they are bounded by MAX_OUTPUT_DIM above.
            size: LogicalSize {
                width: width as u32,
                height: height as u32,
            },
        })
    }

    /// Number of logical pixels with an explicit color.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`; kept for API symmetry with [`PixelMap::len`].
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color at `coord`, if one was given.
    pub fn get(&self, coord: Coord) -> Option<Rgb8> {
        self.pixels.get(&coord).copied()
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Rgb8)> + '_ {
        self.pixels.iter().map(|(c, rgb)| (*c, *rgb))
    }

    /// Logical bounds: `max x + 1` by `max y + 1`.
    pub fn size(&self) -> LogicalSize {
        self.size
    }

    /// Integer magnification that fits the larger side within [`MAX_OUTPUT_DIM`].
    pub fn scale_factor(&self) -> u32 {
        self.size.scale_factor(MAX_OUTPUT_DIM)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixmap/model.rs"]
mod tests;
