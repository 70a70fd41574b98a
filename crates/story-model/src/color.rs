//! Solid color values
//!
//! The persisted schema nests color channels under a `color` key
//! (`{"color": {"r": 255, "g": 255, "b": 255, "a": 1.0}}`); [`Color`]
//! mirrors that shape.

use serde::{Deserialize, Serialize};

/// Solid RGBA color
///
/// Alpha defaults to fully opaque and is omitted from the serialized form
/// when it still is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Channel values
    pub color: Channels,
}

/// RGBA channel values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Channels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque", skip_serializing_if = "is_opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_opaque(a: &f64) -> bool {
    (*a - 1.0).abs() < f64::EPSILON
}

impl Color {
    /// Opaque solid color from RGB channels
    #[inline]
    #[must_use]
    pub fn solid(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: Channels { r, g, b, a: 1.0 },
        }
    }

    /// Opaque white, the default page backdrop
    #[inline]
    #[must_use]
    pub fn white() -> Self {
        Self::solid(255, 255, 255)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}
