//! RGB to grayscale conversion using the luminosity method.

use crate::error::{Channel, InvalidArgument};

/// Channel weights of the luminosity method, in r, g, b order.
///
/// The weights do not sum to exactly 1.0 and the result is not
/// re-normalized: pure white truncates to 254.
pub const LUMINOSITY_WEIGHTS: [f64; 3] = [0.21, 0.72, 0.07];

/// Collapses an RGB triple into a single luminosity value.
///
/// Channels are checked in r, g, b order and the first one outside
/// `[0, 255]` is reported. The weighted sum is truncated toward zero,
/// never rounded, so results range from 0 to 254.
pub fn rgb_to_grayscale(r: i64, g: i64, b: i64) -> Result<u8, InvalidArgument> {
    for (channel, value) in [(Channel::R, r), (Channel::G, g), (Channel::B, b)] {
        if !(0..=255).contains(&value) {
            return Err(InvalidArgument::ChannelOutOfRange { channel, value });
        }
    }

    let [wr, wg, wb] = LUMINOSITY_WEIGHTS;
    Ok((wr * r as f64 + wg * g as f64 + wb * b as f64) as u8)
}
