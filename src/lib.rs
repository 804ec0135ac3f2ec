#![doc = include_str!("../README.md")]

pub mod color;
pub mod error;
pub mod geometry;
pub mod resolution;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::{rgb_to_grayscale, LUMINOSITY_WEIGHTS};
pub use crate::error::{Channel, InvalidArgument};
pub use crate::geometry::{aspect_ratio, resize_to_fit};
pub use crate::resolution::{is_valid_resolution, MinResolution};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use image_math::prelude::*;
///
/// let (w, h) = resize_to_fit(4000, 3000, 1600)?;
/// assert_eq!((w, h), (1600, 1200));
/// assert!(is_valid_resolution(w, h, MinResolution::new(1280, 720)));
/// # Ok::<(), image_math::InvalidArgument>(())
/// ```
pub mod prelude {
    pub use crate::color::rgb_to_grayscale;
    pub use crate::error::InvalidArgument;
    pub use crate::geometry::{aspect_ratio, resize_to_fit};
    pub use crate::resolution::{is_valid_resolution, MinResolution};
}
