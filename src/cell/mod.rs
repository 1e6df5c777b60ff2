//! Slot primitives with explicit construction and destruction.

pub mod maybe;

pub use maybe::Maybe;
