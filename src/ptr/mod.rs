//! Pointer arithmetic helpers.

pub mod range;

pub use range::{pointer_range_size, slice_range_size};
