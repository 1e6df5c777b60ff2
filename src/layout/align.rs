//! Alignment probing and fixed-alignment marker types.

use core::marker::PhantomData;
use core::mem::size_of;

/// Computes the alignment a type needs from struct layout alone.
///
/// `Aligner<T>` places a single byte in front of a `T`; under `repr(C)` the
/// `T` field lands at the first multiple of its alignment, and the struct is
/// padded to a multiple of that alignment, so the size difference is exactly
/// the alignment of `T`.
pub struct AlignmentFinder<T>(PhantomData<T>);

#[repr(C)]
#[allow(dead_code)]
struct Aligner<T> {
    _c: u8,
    _t: T,
}

impl<T> AlignmentFinder<T> {
    /// Alignment of `T` in bytes.
    pub const ALIGNMENT: usize = size_of::<Aligner<T>>() - size_of::<T>();
}

/// Expands to the alignment of a type, as computed by [`AlignmentFinder`].
///
/// ```rust
/// use widgetry::alignof;
///
/// assert_eq!(alignof!(u32), core::mem::align_of::<u32>());
/// ```
#[macro_export]
macro_rules! alignof {
    ($t:ty) => {
        $crate::layout::AlignmentFinder::<$t>::ALIGNMENT
    };
}

/// An element whose alignment is at least `N` bytes.
///
/// Only `N` in `{1, 2, 4, 8, 16}` is supported; other values fail to
/// type-check because `Align<N>` has no [`Alignment`] impl.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct AlignedElem<const N: usize>(<Align<N> as Alignment>::Elem)
where
    Align<N>: Alignment;

/// Type-level alignment selector.
pub struct Align<const N: usize>;

/// Maps an [`Align`] selector to its marker type.
pub trait Alignment {
    /// A one-byte payload aligned to the selected boundary.
    type Elem: Copy + Default;
}

macro_rules! impl_alignments {
    ($($name:ident as $n:literal),* $(,)?) => { $(
        #[doc = concat!("One byte aligned to ", stringify!($n), " bytes.")]
        #[derive(Clone, Copy, Default, Debug)]
        #[repr(C, align($n))]
        pub struct $name {
            /// The anchored byte.
            pub elem: u8,
        }

        impl Alignment for Align<$n> {
            type Elem = $name;
        }
    )* };
}

impl_alignments!(Align1 as 1, Align2 as 2, Align4 as 4, Align8 as 8, Align16 as 16);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::align_of;

    #[repr(align(32))]
    #[allow(dead_code)]
    struct Wide(u8);

    #[test]
    fn test_finder_matches_builtin_alignment() {
        assert_eq!(AlignmentFinder::<u8>::ALIGNMENT, align_of::<u8>());
        assert_eq!(AlignmentFinder::<u16>::ALIGNMENT, align_of::<u16>());
        assert_eq!(AlignmentFinder::<u32>::ALIGNMENT, align_of::<u32>());
        assert_eq!(AlignmentFinder::<u64>::ALIGNMENT, align_of::<u64>());
        assert_eq!(AlignmentFinder::<f32>::ALIGNMENT, align_of::<f32>());
        assert_eq!(AlignmentFinder::<f64>::ALIGNMENT, align_of::<f64>());
        assert_eq!(AlignmentFinder::<u128>::ALIGNMENT, align_of::<u128>());
        assert_eq!(AlignmentFinder::<Wide>::ALIGNMENT, 32);
        assert_eq!(AlignmentFinder::<()>::ALIGNMENT, 1);
    }

    #[test]
    fn test_aligned_elem_sizes() {
        assert_eq!(align_of::<AlignedElem<1>>(), 1);
        assert_eq!(align_of::<AlignedElem<2>>(), 2);
        assert_eq!(align_of::<AlignedElem<4>>(), 4);
        assert_eq!(align_of::<AlignedElem<8>>(), 8);
        assert_eq!(align_of::<AlignedElem<16>>(), 16);
        assert_eq!(core::mem::size_of::<AlignedElem<16>>(), 16);
    }
}
