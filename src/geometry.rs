//! Aspect-ratio and resize-to-fit calculations.
//!
//! Both helpers operate purely on dimensions, never on pixel data, and
//! validate their inputs before computing anything.

use crate::error::{require_positive, InvalidArgument};

use log::debug;

/// Computes the width-to-height proportion of an image.
///
/// Fails if either dimension is zero or negative; the division is never
/// attempted on invalid input.
#[inline]
pub fn aspect_ratio(width: i64, height: i64) -> Result<f64, InvalidArgument> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    Ok(width as f64 / height as f64)
}

/// Scales `(width, height)` by a common factor so the larger dimension fits
/// within `max_size`, preserving the original proportions.
///
/// Dimensions already within the bound are returned unchanged; images are
/// never upscaled. Scaled values are truncated toward zero, so the larger
/// output may land one pixel under `max_size` when the division is inexact.
/// When `width == height`, the scale is taken from the height.
pub fn resize_to_fit(
    width: i64,
    height: i64,
    max_size: i64,
) -> Result<(i64, i64), InvalidArgument> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    require_positive("max_size", max_size)?;

    if width <= max_size && height <= max_size {
        return Ok((width, height));
    }

    let scale = if width > height {
        max_size as f64 / width as f64
    } else {
        max_size as f64 / height as f64
    };
    debug!("resize: {width}x{height} exceeds {max_size}, scale {scale:.4}");

    Ok(((width as f64 * scale) as i64, (height as f64 * scale) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn aspect_ratio_basic() {
        assert!(approx_eq(aspect_ratio(1920, 1080).unwrap(), 1920.0 / 1080.0));
        assert!(approx_eq(aspect_ratio(1080, 1920).unwrap(), 0.5625));
        assert!(approx_eq(aspect_ratio(1000, 1000).unwrap(), 1.0));
    }

    #[test]
    fn aspect_ratio_rejects_non_positive_dimensions() {
        assert_eq!(
            aspect_ratio(0, 100),
            Err(InvalidArgument::NonPositiveDimension {
                name: "width",
                value: 0,
            })
        );
        assert_eq!(
            aspect_ratio(100, -1),
            Err(InvalidArgument::NonPositiveDimension {
                name: "height",
                value: -1,
            })
        );
    }

    #[test]
    fn resize_keeps_dimensions_already_within_bound() {
        assert_eq!(resize_to_fit(800, 600, 1000).unwrap(), (800, 600));
        assert_eq!(resize_to_fit(1920, 1080, 2000).unwrap(), (1920, 1080));
        // Exactly at the bound is still a no-op.
        assert_eq!(resize_to_fit(1000, 500, 1000).unwrap(), (1000, 500));
    }

    #[test]
    fn resize_scales_from_the_larger_dimension() {
        assert_eq!(resize_to_fit(2000, 1000, 1000).unwrap(), (1000, 500));
        assert_eq!(resize_to_fit(1000, 2000, 1000).unwrap(), (500, 1000));
    }

    #[test]
    fn resize_square_takes_height_branch() {
        assert_eq!(resize_to_fit(2000, 2000, 1000).unwrap(), (1000, 1000));
    }

    #[test]
    fn resize_truncates_toward_zero() {
        // 800/1234 does not divide evenly; the larger output may fall one
        // pixel short of the bound, the smaller one is truncated.
        let (w, h) = resize_to_fit(1234, 997, 800).unwrap();
        assert!(w == 800 || w == 799, "unexpected width {w}");
        assert!(h <= 800);
        assert!((h as f64 - 997.0 * 800.0 / 1234.0).abs() < 1.0);
    }

    #[test]
    fn resize_rejects_non_positive_inputs() {
        assert_eq!(
            resize_to_fit(-1, 100, 100),
            Err(InvalidArgument::NonPositiveDimension {
                name: "width",
                value: -1,
            })
        );
        assert_eq!(
            resize_to_fit(100, 0, 100),
            Err(InvalidArgument::NonPositiveDimension {
                name: "height",
                value: 0,
            })
        );
        assert_eq!(
            resize_to_fit(100, 100, 0),
            Err(InvalidArgument::NonPositiveDimension {
                name: "max_size",
                value: 0,
            })
        );
    }
}
