//! Core processing building blocks: the per-character transforms, the
//! fixed-order pipeline, and the parameter struct. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
