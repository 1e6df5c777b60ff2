//! Values that only exist in diagnostic builds.

pub mod debug_only;

pub use debug_only::DebugOnly;
