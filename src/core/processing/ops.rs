use rand::Rng;

/// Rewrite every ASCII letter with an independently chosen case.
///
/// Each letter gets a fresh fair coin flip deciding its final case, so the
/// outcome may match the original case; non-letter characters pass through
/// unchanged. The generator is injected so callers can seed it for
/// deterministic output.
pub fn randomize_case<R: Rng>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                if rng.gen::<bool>() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else {
                c
            }
        })
        .collect()
}

/// Emit the character sequence in exactly opposite order.
///
/// Reversal operates on Unicode scalar values (`char`); combining sequences
/// are not kept together.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}
