//! Minimum-resolution validation.

use serde::Deserialize;

/// Minimum width and height an image must meet.
///
/// Defaults to 1×1, which accepts any positive resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MinResolution {
    pub width: i64,
    pub height: i64,
}

impl Default for MinResolution {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

impl MinResolution {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }
}

/// Whether `width` × `height` meets the minimum in both dimensions.
///
/// Zero and negative inputs are permitted and simply compare as too small;
/// unlike the other helpers, this one never fails.
#[inline]
pub fn is_valid_resolution(width: i64, height: i64, min: MinResolution) -> bool {
    width >= min.width && height >= min.height
}
