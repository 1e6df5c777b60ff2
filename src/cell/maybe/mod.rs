//! `Maybe` — lazily construct a value in place, without heap allocation.
//!
//! A `Maybe<T>` starts out empty: no `T` exists and none will be dropped. Once
//! [`construct`](Maybe::construct) runs, the `T` lives in the slot until it is
//! [`destroy`](Maybe::destroy)ed or the `Maybe` itself is dropped.
//!
//! This is for values whose inputs are not known at the point the owning
//! struct or stack frame is set up, and which have no sensible placeholder.
//! Constructing twice is a contract violation: it panics in diagnostic builds
//! and leaks the earlier value otherwise. Reading or destroying an empty slot
//! always panics; `get_unchecked` skips that check outside diagnostic builds.
//!
//! ```rust
//! use widgetry::Maybe;
//!
//! let mut slot: Maybe<String> = Maybe::new();
//! assert!(slot.is_empty());
//!
//! slot.construct_from("abc");
//! assert_eq!(slot.get(), "abc");
//!
//! slot.destroy();
//! assert!(slot.is_empty());
//! ```

#[cfg(test)]
mod tests;

use core::fmt;

use crate::contract_assert;
use crate::layout::TypedStorage;

/// Inline storage for zero or one `T`, constructed on demand.
pub struct Maybe<T> {
    storage: TypedStorage<T>,
    constructed: bool,
}

impl<T> Maybe<T> {
    /// Creates an empty slot.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: TypedStorage::new(),
            constructed: false,
        }
    }

    /// `true` until a value is constructed, and again after it is destroyed.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.constructed
    }

    /// Moves `value` into the slot.
    ///
    /// The slot must be empty.
    #[inline]
    pub fn construct(&mut self, value: T) -> &mut T {
        contract_assert!(!self.constructed);
        self.constructed = true;
        self.storage.write(value)
    }

    /// Builds the value with `init` and stores it.
    ///
    /// The slot must be empty. If `init` panics the slot stays empty.
    #[inline]
    pub fn construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        contract_assert!(!self.constructed);
        let value = init();
        self.constructed = true;
        self.storage.write(value)
    }

    /// Stores `T::default()`.
    #[inline]
    pub fn construct_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.construct_with(T::default)
    }

    /// Converts `args` into a `T` and stores it.
    ///
    /// Multi-argument constructors are expressed as `From<(A, B, ..)>` impls
    /// on `T`.
    #[inline]
    pub fn construct_from<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.construct_with(|| T::from(args))
    }

    /// Shared reference to the value.
    ///
    /// # Panics
    /// If the slot is empty, in every build profile.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        self.require_constructed();
        // SAFETY: `constructed` tracks initialization of `storage`.
        unsafe { self.storage.assume_init_ref() }
    }

    /// Exclusive reference to the value.
    ///
    /// # Panics
    /// If the slot is empty, in every build profile.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        self.require_constructed();
        // SAFETY: `constructed` tracks initialization of `storage`.
        unsafe { self.storage.assume_init_mut() }
    }

    /// Shared reference to the value, checked only in diagnostic builds.
    ///
    /// # Safety
    /// The slot must be constructed.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        contract_assert!(self.constructed);
        // SAFETY: caller guarantees the slot is constructed.
        unsafe { self.storage.assume_init_ref() }
    }

    /// Exclusive reference to the value, checked only in diagnostic builds.
    ///
    /// # Safety
    /// The slot must be constructed.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        contract_assert!(self.constructed);
        // SAFETY: caller guarantees the slot is constructed.
        unsafe { self.storage.assume_init_mut() }
    }

    /// Address of the value. The slot must be constructed.
    #[inline]
    pub fn addr(&self) -> *const T {
        contract_assert!(self.constructed);
        self.storage.addr()
    }

    /// Writable address of the value. The slot must be constructed.
    #[inline]
    pub fn addr_mut(&mut self) -> *mut T {
        contract_assert!(self.constructed);
        self.storage.addr_mut()
    }

    /// The value, if constructed.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.constructed {
            // SAFETY: checked above.
            Some(unsafe { self.storage.assume_init_ref() })
        } else {
            None
        }
    }

    /// Drops the value and returns to the empty state.
    ///
    /// # Panics
    /// If the slot is empty, in every build profile.
    #[track_caller]
    pub fn destroy(&mut self) {
        self.require_constructed();
        // Clear the flag first so a panicking destructor cannot cause a second drop.
        self.constructed = false;
        // SAFETY: the slot was constructed and is now marked empty.
        unsafe { self.storage.drop_in_place() }
    }

    /// Drops the value if there is one.
    #[inline]
    pub fn destroy_if_constructed(&mut self) {
        if self.constructed {
            self.destroy();
        }
    }

    /// Moves the value out, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        if !self.constructed {
            return None;
        }
        self.constructed = false;
        // SAFETY: was constructed; the flag now prevents any further access.
        Some(unsafe { self.storage.read() })
    }

    /// Consumes the slot.
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    // Reading or dropping an empty slot would touch uninitialized memory, so
    // unlike the other preconditions this one is kept in production builds.
    #[inline(always)]
    #[track_caller]
    fn require_constructed(&self) {
        if !self.constructed {
            let caller = core::panic::Location::caller();
            crate::assert::contract_violation("self.constructed", caller.file(), caller.line());
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Maybe<T> {
    fn drop(&mut self) {
        self.destroy_if_constructed();
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Maybe").field(value).finish(),
            None => f.write_str("Maybe(<empty>)"),
        }
    }
}
