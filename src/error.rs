//! Shared error type for the fallible helpers.

use serde::Serialize;

/// Identifier for the three channels checked by the grayscale converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    R,
    G,
    B,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::R => write!(f, "r"),
            Channel::G => write!(f, "g"),
            Channel::B => write!(f, "b"),
        }
    }
}

/// Reasons why a helper may reject its inputs.
///
/// Raised before any computation proceeds; callers should treat this as a
/// recoverable bad-input condition, not a fatal one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A dimension or size bound that must be strictly positive was not.
    NonPositiveDimension { name: &'static str, value: i64 },
    /// A color channel fell outside the 8-bit range.
    ChannelOutOfRange { channel: Channel, value: i64 },
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgument::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive (got {value})")
            }
            InvalidArgument::ChannelOutOfRange { channel, value } => {
                write!(f, "{channel} must be between 0 and 255 (got {value})")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

/// Rejects zero or negative values for a dimension-like parameter.
#[inline]
pub(crate) fn require_positive(name: &'static str, value: i64) -> Result<(), InvalidArgument> {
    if value <= 0 {
        return Err(InvalidArgument::NonPositiveDimension { name, value });
    }
    Ok(())
}
