//! Layout helpers: alignment probing, alignment markers, and raw aligned storage.

pub mod align;
pub mod storage;

pub use align::{Align, Align1, Align16, Align2, Align4, Align8, AlignedElem, Alignment, AlignmentFinder};
pub use storage::{AlignedStorage, TypedStorage};
