pub mod ops;
pub mod pipeline;
