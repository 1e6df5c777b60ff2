//! `DebugOnly` — a value that is stored in diagnostic builds and vanishes in production.
//!
//! Lets a call site keep a result that is only consumed by assertions:
//!
//! ```rust
//! use widgetry::{contract_assert, DebugOnly};
//!
//! fn push(v: &mut Vec<u32>, x: u32) -> bool {
//!     v.push(x);
//!     true
//! }
//!
//! let mut v = Vec::new();
//! let pushed: DebugOnly<bool> = push(&mut v, 7).into();
//! contract_assert!(*pushed);
//! ```
//!
//! without a `#[cfg(debug_assertions)]` around the binding and without paying
//! for the storage in release builds, where `DebugOnly<T>` is zero-sized.
//!
//! Coercion to `T` (`Deref`, `get`, `into_inner`) only exists in diagnostic
//! builds; there is no value to hand out otherwise.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{AddAssign, SubAssign};

use num_traits::One;

#[cfg(not(debug_assertions))]
use core::marker::PhantomData;

/// A `T` that only exists when `debug_assertions` are enabled.
#[cfg(debug_assertions)]
pub struct DebugOnly<T> {
    value: T,
}

/// A `T` that only exists when `debug_assertions` are enabled.
#[cfg(not(debug_assertions))]
pub struct DebugOnly<T> {
    _marker: PhantomData<T>,
}

impl<T> DebugOnly<T> {
    /// `true` when this build stores the value.
    pub const PRESENT: bool = cfg!(debug_assertions);

    /// Wraps `value`; production builds drop it immediately.
    #[cfg(debug_assertions)]
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Wraps `value`; production builds drop it immediately.
    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub fn new(value: T) -> Self {
        drop(value);
        Self { _marker: PhantomData }
    }

    /// Replaces the stored value.
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        #[cfg(debug_assertions)]
        {
            self.value = value;
        }
        #[cfg(not(debug_assertions))]
        drop(value);
    }

    /// Adds one to the stored value. No-op in production builds.
    #[inline(always)]
    pub fn increment(&mut self)
    where
        T: One + AddAssign,
    {
        #[cfg(debug_assertions)]
        {
            self.value += T::one();
        }
    }

    /// Subtracts one from the stored value. No-op in production builds.
    #[inline(always)]
    pub fn decrement(&mut self)
    where
        T: One + SubAssign,
    {
        #[cfg(debug_assertions)]
        {
            self.value -= T::one();
        }
    }

    /// Returns the stored value.
    #[cfg(debug_assertions)]
    #[inline(always)]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the stored value mutably.
    #[cfg(debug_assertions)]
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwraps the stored value.
    #[cfg(debug_assertions)]
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(debug_assertions)]
impl<T> core::ops::Deref for DebugOnly<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

#[cfg(debug_assertions)]
impl<T> core::ops::DerefMut for DebugOnly<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Default> Default for DebugOnly<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for DebugOnly<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Clone for DebugOnly<T> {
    fn clone(&self) -> Self {
        #[cfg(debug_assertions)]
        {
            Self::new(self.value.clone())
        }
        #[cfg(not(debug_assertions))]
        {
            Self { _marker: PhantomData }
        }
    }
}

impl<T: Copy> Copy for DebugOnly<T> {}

/// Compares the stored value. In production builds nothing compares equal.
impl<T: PartialEq> PartialEq<T> for DebugOnly<T> {
    #[inline(always)]
    fn eq(&self, other: &T) -> bool {
        #[cfg(debug_assertions)]
        {
            self.value == *other
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = other;
            false
        }
    }
}

/// Orders the stored value. In production builds `partial_cmp` is `None`, so
/// every `<` comparison is `false`.
impl<T: PartialOrd> PartialOrd<T> for DebugOnly<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        #[cfg(debug_assertions)]
        {
            self.value.partial_cmp(other)
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = other;
            None
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugOnly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(debug_assertions)]
        {
            f.debug_tuple("DebugOnly").field(&self.value).finish()
        }
        #[cfg(not(debug_assertions))]
        {
            f.write_str("DebugOnly(<elided>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DebugOnly;

    #[test]
    #[cfg(debug_assertions)]
    fn test_holds_value_in_diagnostic_build() {
        let mut counter: DebugOnly<i32> = DebugOnly::new(10);
        counter.increment();
        counter.increment();
        counter.decrement();
        assert_eq!(*counter, 11);

        counter.set(-3);
        assert_eq!(counter.into_inner(), -3);
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_less_than_in_diagnostic_build() {
        let d = DebugOnly::new(5u8);
        assert!(d < 6);
        assert!(!(d < 5));
        assert!(d == 5);
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_deref_mut_writes_through() {
        let mut v: DebugOnly<Vec<u8>> = DebugOnly::default();
        v.push(1);
        v.get_mut().push(2);
        assert_eq!(v.get().as_slice(), &[1, 2]);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_production_build_is_inert() {
        assert_eq!(core::mem::size_of::<DebugOnly<[u64; 16]>>(), 0);

        let mut counter = DebugOnly::new(1u32);
        counter.increment();
        counter.decrement();
        assert!(!(counter < u32::MAX));
        assert!(!(counter == 1));
    }

    #[test]
    fn test_present_matches_build_profile() {
        assert_eq!(DebugOnly::<u8>::PRESENT, cfg!(debug_assertions));
    }

    #[test]
    fn test_debug_format() {
        let d = DebugOnly::new(3);
        let s = format!("{d:?}");
        assert!(s.starts_with("DebugOnly("));
    }
}
