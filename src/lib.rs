#![doc = r#"
textmorph — a small text-file processing toolkit.

This crate reads a UTF-8 text file, optionally randomizes the case of each
ASCII letter and/or reverses the character sequence, and writes the result
next to it under a `_processed.txt` name. It powers the textmorph CLI and
can be embedded in your own Rust applications.

Quick start: process a file
---------------------------
```rust,no_run
use textmorph::{process_file, ProcessingParams};

fn main() -> textmorph::Result<()> {
    let params = ProcessingParams {
        randomize_case: true,
        reverse: true,
        ..ProcessingParams::default()
    };

    let report = process_file("my_document.txt", &params, &mut rand::thread_rng())?;
    println!("wrote {:?} applying {:?}", report.output, report.applied);
    Ok(())
}
```

Transform in memory
-------------------
```rust
use textmorph::{transform_text, ProcessingParams};

let params = ProcessingParams {
    reverse: true,
    ..ProcessingParams::default()
};
let (text, applied) = transform_text("Hello, World!", &params, &mut rand::thread_rng());
assert_eq!(text, "!dlroW ,olleH");
assert_eq!(applied.len(), 1);
```

Deterministic randomization
---------------------------
The randomize-case transform takes any `rand::Rng`, so tests and
reproducible runs can seed one explicitly:

```rust
use rand::{rngs::StdRng, SeedableRng};
use textmorph::{transform_text, ProcessingParams};

let params = ProcessingParams {
    randomize_case: true,
    ..ProcessingParams::default()
};
let mut rng = StdRng::seed_from_u64(42);
let (text, _) = transform_text("Hello", &params, &mut rng);
assert_eq!(text.to_lowercase(), "hello");
```

Error handling
--------------
All public functions return `textmorph::Result<T>`; match on
`textmorph::Error` to handle the missing-input case separately from other
I/O failures.

Useful modules
--------------
- [`api`] — high-level entry points (`process_file`, `transform_text`).
- [`types`] — the `Transform` enum.
- [`io`] — file reading/writing and output-path derivation.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{ProcessingParams, INPUT_DIR, OUTPUT_DIR};
pub use error::{Error, Result};
pub use types::Transform;

pub use api::{process_file, transform_text, ProcessReport};
