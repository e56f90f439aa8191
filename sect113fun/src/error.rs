use crate::{hex::HexError, CoordinateSystem};
use core::fmt;

/// Errors from building curves, points and lookup tables.
///
/// None of these are transient. They all mean the caller passed something
/// that can never work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A curve constant could not be decoded to its fixed width.
    MalformedParameter {
        /// Which constant (`"a"`, `"b"`, `"order"`, `"cofactor"`, ...).
        name: &'static str,
        /// Why decoding failed.
        reason: HexError,
    },
    /// The curve does not support the requested coordinate system.
    UnsupportedCoordinateSystem(CoordinateSystem),
    /// An index or range went past the end of a table or slice.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length that was indexed into.
        len: usize,
    },
    /// The wrong number of z-coordinates was given for the coordinate system.
    InvalidZCoordinates {
        /// How many the coordinate system uses.
        expected: usize,
        /// How many were given.
        got: usize,
    },
    /// A lookup table entry must be a normalized, finite point.
    NotNormalized {
        /// Position of the point in the input slice.
        position: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            MalformedParameter { name, reason } => {
                write!(f, "malformed curve parameter `{}`: {}", name, reason)
            }
            UnsupportedCoordinateSystem(system) => {
                write!(f, "unsupported coordinate system: {}", system)
            }
            IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            InvalidZCoordinates { expected, got } => {
                write!(f, "expected {} z-coordinates but got {}", expected, got)
            }
            NotNormalized { position } => write!(
                f,
                "point at position {} is infinity or not normalized",
                position
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedParameter { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
