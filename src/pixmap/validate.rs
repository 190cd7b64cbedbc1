//! Input validation: raw upload bytes to a [`PixelMap`].
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the bytes parse as JSON ([`ValidationError::MalformedInput`])
//! 2. the document is an object holding a `pixels` object ([`ValidationError::MalformedStructure`])
//! 3. `pixels` is non-empty ([`ValidationError::EmptyPixelData`])
//! 4. every value is a 3-element array ([`ValidationError::InvalidColorShape`])
//! 5. every channel is an integer in `[0, 255]` ([`ValidationError::InvalidColorRange`])
//! 6. every key is `"<x>,<y>"` ([`ValidationError::InvalidCoordinate`])
//! 7. keys name distinct pixels and fit the output cap ([`PixelMap::from_entries`])
//!
//! Steps 4 and 5 run per entry in ascending key order; step 6 starts only once every color
//! has been accepted.

use serde_json::Value;

use crate::foundation::core::{Coord, Rgb8};
use crate::foundation::error::ValidationError;
use crate::pixmap::model::PixelMap;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse and validate an uploaded document.
#[tracing::instrument(level = "debug", skip(bytes), fields(len = bytes.len()))]
pub fn validate_and_parse(bytes: &[u8]) -> Result<PixelMap, ValidationError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let doc: Value = serde_json::from_slice(bytes)
        .map_err(|e| ValidationError::MalformedInput(e.to_string()))?;
    validate(&doc)
}

/// Validate an already-parsed JSON document.
pub fn validate(doc: &Value) -> Result<PixelMap, ValidationError> {
    let pixels = doc
        .get("pixels")
        .and_then(Value::as_object)
        .ok_or(ValidationError::MalformedStructure)?;

    if pixels.is_empty() {
        return Err(ValidationError::EmptyPixelData);
    }

    let mut colors = Vec::with_capacity(pixels.len());
    for (key, value) in pixels {
        colors.push((key.as_str(), parse_color(key, value)?));
    }

    let mut entries = Vec::with_capacity(colors.len());
    for (key, color) in colors {
        entries.push((parse_coord(key)?, color));
    }

    let map = PixelMap::from_entries(entries)?;
    let size = map.size();
    tracing::debug!(
        pixels = map.len(),
        width = size.width,
        height = size.height,
        scale_factor = map.scale_factor(),
        "pixel map validated"
    );
    Ok(map)
}

/// Parse a `"<x>,<y>"` key.
///
/// Each side must be a non-empty run of ASCII digits that fits in `u32`; signs, whitespace and
/// extra commas are rejected.
pub fn parse_coord(key: &str) -> Result<Coord, ValidationError> {
    let invalid = || ValidationError::InvalidCoordinate(key.to_string());
    let (x, y) = key.split_once(',').ok_or_else(invalid)?;
    let x = parse_axis(x).ok_or_else(invalid)?;
    let y = parse_axis(y).ok_or_else(invalid)?;
    Ok(Coord::new(x, y))
}

fn parse_axis(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_color(key: &str, value: &Value) -> Result<Rgb8, ValidationError> {
    let channels = match value.as_array() {
        Some(c) if c.len() == 3 => c,
        _ => return Err(ValidationError::InvalidColorShape(key.to_string())),
    };

    let mut rgb = [0u8; 3];
    for (slot, channel) in rgb.iter_mut().zip(channels) {
        // Floats, booleans and strings fall through as_u64 and are reported as range errors.
        *slot = channel
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| ValidationError::InvalidColorRange(key.to_string()))?;
    }
    Ok(Rgb8::from(rgb))
}

#[cfg(test)]
#[path = "../../tests/unit/pixmap/validate.rs"]
mod tests;
