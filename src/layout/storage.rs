//! Raw, uninitialized, aligned storage.
//!
//! Neither type here tracks what lives inside it. Callers own the lifetime of
//! anything they place in the block: constructing before reading, dropping
//! exactly once, and never writing past the end.
//!
//! `TypedStorage` also centralizes the unsafe `MaybeUninit` operations used by
//! [`crate::cell::Maybe`], so there is a single place to audit reads, writes,
//! drops and the conversion to references.

use core::mem::MaybeUninit;
use core::ptr;

/// `N` uninitialized bytes aligned to at least 8 bytes.
///
/// The `u64` member is what pins the alignment; nothing ever reads it.
#[repr(C)]
#[derive(Clone, Copy)]
pub union AlignedStorage<const N: usize> {
    bytes: [MaybeUninit<u8>; N],
    _align: u64,
}

impl<const N: usize> AlignedStorage<N> {
    /// Creates an uninitialized block.
    #[inline]
    pub const fn new() -> Self {
        Self {
            bytes: [MaybeUninit::uninit(); N],
        }
    }

    /// Start of the block.
    #[inline(always)]
    pub const fn addr(&self) -> *const u8 {
        (self as *const Self).cast()
    }

    /// Start of the block, writable.
    #[inline(always)]
    pub fn addr_mut(&mut self) -> *mut u8 {
        (self as *mut Self).cast()
    }

    /// Usable bytes.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for a zero-byte block.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for AlignedStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Uninitialized storage with the size and alignment of `T`.
#[repr(transparent)]
pub struct TypedStorage<T> {
    slot: MaybeUninit<T>,
}

impl<T> TypedStorage<T> {
    /// Creates uninitialized storage.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
        }
    }

    /// Typed address of the slot.
    #[inline(always)]
    pub const fn addr(&self) -> *const T {
        self.slot.as_ptr()
    }

    /// Typed writable address of the slot.
    #[inline(always)]
    pub fn addr_mut(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }

    /// Moves `value` into the slot without dropping any previous contents.
    #[inline(always)]
    pub fn write(&mut self, value: T) -> &mut T {
        self.slot.write(value)
    }

    /// Interprets the slot as `&T`.
    ///
    /// # Safety
    /// The slot must hold an initialized `T`.
    #[inline(always)]
    pub unsafe fn assume_init_ref(&self) -> &T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { self.slot.assume_init_ref() }
    }

    /// Interprets the slot as `&mut T`.
    ///
    /// # Safety
    /// The slot must hold an initialized `T`.
    #[inline(always)]
    pub unsafe fn assume_init_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Bitwise-moves the value out, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// The slot must hold an initialized `T`, and the caller must not read or
    /// drop it again afterwards.
    #[inline(always)]
    pub unsafe fn read(&self) -> T {
        // SAFETY: caller asserts initialization and gives up the old value.
        unsafe { ptr::read(self.slot.as_ptr()) }
    }

    /// Drops the value in place.
    ///
    /// # Safety
    /// The slot must hold an initialized `T`, dropped at most once.
    #[inline(always)]
    pub unsafe fn drop_in_place(&mut self) {
        // SAFETY: caller asserts initialization and drop uniqueness.
        unsafe { ptr::drop_in_place(self.slot.as_mut_ptr()) }
    }
}

impl<T> Default for TypedStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
