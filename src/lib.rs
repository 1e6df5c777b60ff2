//! # `widgetry` - Widget Module Foundation Toolkit
//!
//! Small foundation helpers for code that manages object lifetimes by hand,
//! and the component registry a platform widget module plugs into.
//!
//! ## Key Features
//!
//! - **Contract assertions**: [`contract_assert!`] halts loudly in diagnostic
//!   builds and compiles to nothing in production builds.
//! - **Debug-only values**: [`DebugOnly<T>`] stores a `T` for assertions in
//!   diagnostic builds and is zero-sized otherwise.
//! - **Layout helpers**: [`AlignmentFinder`], fixed-alignment markers
//!   ([`AlignedElem<N>`](layout::AlignedElem)) and raw aligned storage.
//! - **Lazy construction**: [`Maybe<T>`] holds zero or one `T` in inline
//!   storage, constructed and destroyed explicitly.
//! - **Pointer ranges**: [`pointer_range_size`] counts elements between two
//!   pointers without signed overflow.
//! - **Component registry**: [`registry::ComponentRegistry`] resolves class
//!   ids and contract ids to factories supplied by static [`registry::Module`]s.
//! - **Widget module**: [`widget::WIDGET_MODULE`] registers the mobile
//!   platform's window, clipboard, printing and input components.
//!
//! ## Build profiles
//!
//! `debug_assertions` is the diagnostic switch. With it, contract violations
//! panic with the failing expression, file and line, and `DebugOnly` carries
//! its value. Without it, both vanish.
//!
//! ## Example
//!
//! ```rust
//! use widgetry::Maybe;
//!
//! struct Connection {
//!     port: u16,
//! }
//!
//! let mut conn: Maybe<Connection> = Maybe::new();
//! // ... later, once the port is known:
//! conn.construct(Connection { port: 8080 });
//! assert_eq!(conn.get().port, 8080);
//! conn.destroy();
//! assert!(conn.is_empty());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod assert;
pub mod cell;
pub mod debug;
pub mod layout;
pub mod ptr;
pub mod registry;
pub mod widget;

pub use cell::Maybe;
pub use debug::DebugOnly;
pub use layout::{AlignedElem, AlignedStorage, AlignmentFinder, TypedStorage};
pub use ptr::{pointer_range_size, slice_range_size};

// Compile-time checks on the layout claims made above.
const _: () = {
    use core::mem;

    // The probe agrees with the compiler.
    assert!(AlignmentFinder::<u8>::ALIGNMENT == mem::align_of::<u8>());
    assert!(AlignmentFinder::<u32>::ALIGNMENT == mem::align_of::<u32>());
    assert!(AlignmentFinder::<u64>::ALIGNMENT == mem::align_of::<u64>());
    assert!(AlignmentFinder::<f64>::ALIGNMENT == mem::align_of::<f64>());

    // Markers have exactly the alignment they name.
    assert!(mem::align_of::<AlignedElem<1>>() == 1);
    assert!(mem::align_of::<AlignedElem<2>>() == 2);
    assert!(mem::align_of::<AlignedElem<4>>() == 4);
    assert!(mem::align_of::<AlignedElem<8>>() == 8);
    assert!(mem::align_of::<AlignedElem<16>>() == 16);

    // Storage never pads beyond the payload.
    assert!(mem::align_of::<AlignedStorage<1>>() >= 8);
    assert!(mem::size_of::<TypedStorage<[u8; 3]>>() == 3);

    // `Maybe` costs the payload plus a flag, nothing heap-allocated.
    assert!(mem::size_of::<Maybe<u64>>() <= mem::size_of::<u64>() * 2);
};

#[cfg(not(debug_assertions))]
static_assert!(core::mem::size_of::<DebugOnly<u64>>() == 0);

#[cfg(debug_assertions)]
static_assert!(core::mem::size_of::<DebugOnly<u64>>() == core::mem::size_of::<u64>());
