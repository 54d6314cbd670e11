// SPDX-License-Identifier: MIT

//! Errors produced while reading color values.

use thiserror::Error;

/// A color string that could not be turned into a [`Color`](crate::Color).
///
/// The offending input is carried verbatim so callers can report it.
/// Malformed input is never coerced to black or white.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not `#` followed by exactly six hexadecimal digits.
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidFormat(String),
}
