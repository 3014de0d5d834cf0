use rand::Rng;

use crate::core::params::ProcessingParams;
use crate::core::processing::ops::{randomize_case, reverse_text};
use crate::types::Transform;

/// Apply the selected transforms in their fixed order: case randomization
/// first, then reversal. Returns the resulting text together with the
/// ordered list of transforms that were actually applied; an empty list
/// means the text passed through verbatim.
pub fn apply_transforms<R: Rng>(
    text: &str,
    params: &ProcessingParams,
    rng: &mut R,
) -> (String, Vec<Transform>) {
    let mut processed = text.to_string();
    let mut applied = Vec::new();

    if params.randomize_case {
        processed = randomize_case(&processed, rng);
        applied.push(Transform::RandomizeCase);
    }

    if params.reverse {
        processed = reverse_text(&processed);
        applied.push(Transform::Reverse);
    }

    (processed, applied)
}
