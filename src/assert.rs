//! Contract assertions.
//!
//! `contract_assert!` is the "strong" assertion used throughout the crate: in a
//! diagnostic build (`debug_assertions`) a failing expression stops the
//! program loudly, reporting the expression text together with the file and
//! line it was written on. In a production build the expression is never
//! evaluated, and a violated precondition is the caller's problem.
//!
//! The condition is compiled out entirely in production builds, so it may
//! refer to values that only exist in diagnostic builds, such as the contents
//! of a [`DebugOnly`](crate::DebugOnly). It is not type-checked there either;
//! bindings read only by contracts need `#[cfg(debug_assertions)]` or an
//! underscore name to stay warning-free in production.
//!
//! `static_assert!` is the compile-time counterpart.

/// Asserts a precondition in diagnostic builds only.
///
/// ```rust
/// use widgetry::contract_assert;
///
/// let begin = 4usize;
/// let end = 9usize;
/// contract_assert!(end >= begin);
/// contract_assert!(end >= begin, "range inverted: {} < {}", end, begin);
/// ```
#[macro_export]
macro_rules! contract_assert {
    ($cond:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            if !$cond {
                $crate::assert::contract_violation(stringify!($cond), file!(), line!())
            }
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            if !$cond {
                $crate::assert::contract_violation_with(
                    stringify!($cond),
                    file!(),
                    line!(),
                    format_args!($($arg)+),
                )
            }
        }
    }};
}

/// Fails compilation when `cond` does not hold.
///
/// Usable wherever an item is allowed.
///
/// ```rust
/// use widgetry::static_assert;
///
/// static_assert!(core::mem::size_of::<u32>() == 4);
/// ```
#[macro_export]
macro_rules! static_assert {
    ($cond:expr $(,)?) => {
        const _: () = assert!($cond);
    };
}

/// Out-of-line failure path for [`contract_assert!`].
#[cold]
#[inline(never)]
#[track_caller]
pub fn contract_violation(expr: &'static str, file: &'static str, line: u32) -> ! {
    tracing::error!(expr, file, line, "contract violated");
    panic!("contract violated: {expr}, at {file}:{line}");
}

/// Like [`contract_violation`], with a caller-supplied explanation.
#[cold]
#[inline(never)]
#[track_caller]
pub fn contract_violation_with(
    expr: &'static str,
    file: &'static str,
    line: u32,
    msg: core::fmt::Arguments<'_>,
) -> ! {
    tracing::error!(expr, file, line, %msg, "contract violated");
    panic!("contract violated: {expr} ({msg}), at {file}:{line}");
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_holding_contract_is_silent() {
        contract_assert!(1 + 1 == 2);
        contract_assert!(true, "never shown {}", 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "contract violated: 1 > 2")]
    fn test_broken_contract_reports_expression() {
        contract_assert!(1 > 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "src/assert.rs")]
    fn test_broken_contract_reports_file() {
        contract_assert!(false, "with {}", "context");
    }

    #[test]
    fn test_contract_may_read_debug_only_state() {
        let mut depth = crate::DebugOnly::new(0u32);
        depth.increment();
        contract_assert!(*depth == 1, "depth {}", *depth);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_contract_is_elided_in_production() {
        let calls = core::cell::Cell::new(0);
        contract_assert!({
            calls.set(calls.get() + 1);
            false
        });
        assert_eq!(calls.get(), 0);
    }

    static_assert!(usize::BITS >= 32);
}
