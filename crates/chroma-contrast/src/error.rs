// SPDX-License-Identifier: MIT

//! Errors for contrast evaluation and matrix building.

use chroma_color::ColorError;
use thiserror::Error;

/// Everything that can go wrong before a contrast report exists.
///
/// Empty color or font-size lists are not errors: they produce an empty,
/// valid matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContrastError {
    /// A color string failed hex validation.
    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    /// A font-size token was not `<number><px|pt|em|rem>`.
    #[error("invalid font size: {0:?} (expected <number><px|pt|em|rem>)")]
    InvalidFontSize(String),

    /// The matrix would exceed the caller's evaluation budget.
    #[error("compliance matrix needs {requested} evaluations, limit is {limit}")]
    TooManyEvaluations { requested: usize, limit: usize },
}
