//! Shared types used across textmorph.
//! Includes the `Transform` enum identifying the transformations a
//! processing run can apply.
use serde::{Deserialize, Serialize};

/// A text transformation the pipeline can apply.
///
/// Transforms are applied in a fixed order: `RandomizeCase` first, then
/// `Reverse`. The `Display` form is the human-readable action name used
/// in status output.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Transform {
    /// Per-ASCII-letter independent fair coin flip between upper and lower case.
    RandomizeCase,
    /// Emit the character sequence in exactly opposite order.
    Reverse,
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transform::RandomizeCase => write!(f, "random uppercase"),
            Transform::Reverse => write!(f, "reverse"),
        }
    }
}
