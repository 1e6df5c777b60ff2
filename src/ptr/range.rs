//! Element count between two pointers.

use core::mem::size_of;

use crate::contract_assert;

/// Number of `T` elements in `[begin, end)`.
///
/// `end` must not precede `begin`, and both must come from the same
/// allocation for the result to mean anything. The subtraction is done on
/// addresses as `usize` and divided afterwards, so ranges whose byte length
/// has the top bit set still come out exact.
///
/// Neither pointer is dereferenced. Zero-sized `T` is a contract violation
/// (and yields `0` in production builds).
///
/// ```rust
/// use widgetry::pointer_range_size;
///
/// let xs = [0u32; 10];
/// let r = xs.as_ptr_range();
/// assert_eq!(pointer_range_size(r.start, r.end), 10);
/// ```
#[inline(always)]
pub fn pointer_range_size<T>(begin: *const T, end: *const T) -> usize {
    contract_assert!(end >= begin);
    contract_assert!(size_of::<T>() != 0, "zero-sized element type");
    let bytes = (end as usize).wrapping_sub(begin as usize);
    bytes.checked_div(size_of::<T>()).unwrap_or(0)
}

/// [`pointer_range_size`] over a slice's own bounds.
///
/// Zero-sized elements all share one address, so their count is the slice
/// length.
#[inline]
pub fn slice_range_size<T>(slice: &[T]) -> usize {
    if size_of::<T>() == 0 {
        return slice.len();
    }
    let range = slice.as_ptr_range();
    pointer_range_size(range.start, range.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_is_zero() {
        let x = 5u16;
        let p: *const u16 = &x;
        assert_eq!(pointer_range_size(p, p), 0);
    }

    #[test]
    fn test_counts_elements_not_bytes() {
        let xs = [0u64; 7];
        assert_eq!(slice_range_size(&xs), 7);
        assert_eq!(slice_range_size(&xs[2..5]), 3);
    }

    #[test]
    fn test_zero_sized_slice_counts_its_length() {
        assert_eq!(slice_range_size(&[(); 3]), 3);
        assert_eq!(slice_range_size::<()>(&[]), 0);
    }

    #[test]
    fn test_range_with_top_bit_set() {
        // Addresses only; never dereferenced.
        let begin = 0x10usize as *const u32;
        let end = (0x10 + (usize::MAX / 2 + 1) + 4 * 3) as *const u32;
        let expected = ((usize::MAX / 2 + 1) + 12) / 4;
        assert_eq!(pointer_range_size(begin, end), expected);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "contract violated: end >= begin")]
    fn test_inverted_range_fails_in_diagnostic_build() {
        let xs = [1u8, 2, 3];
        let r = xs.as_ptr_range();
        let _ = pointer_range_size(r.end, r.start);
    }
}
