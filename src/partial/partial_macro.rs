//! The `partial!` macro for placeholder-style partial application.
//!
//! This module provides the [`partial!`] macro, which fixes some
//! arguments of a callable while leaving others open, and the recursive
//! expansion engine shared with [`partial_once!`](crate::partial_once).
//!
//! # Design Decisions
//!
//! Instead of one hand-written rule per (arity, fixed-position) pattern,
//! a single recursive rule set walks the slot list once, left to right.
//! Each placeholder slot contributes a parameter to the reduced closure;
//! each value slot is evaluated on the spot into a capture. The engine
//! draws parameter names from a fixed pool of sixteen identifiers, which
//! is what bounds the supported arity: a seventeenth slot has no
//! identifier to take and the invocation fails to compile.
//!
//! Because the walk is a single pass, every (arity, pattern) combination
//! expands from the same three rules, and the call-site pattern itself
//! spells out which positions are fixed.

/// Partially applies arguments to a callable.
///
/// Takes the callable followed by one slot per parameter, in the
/// callable's own parameter order. Write `__` (double underscore) for a
/// position that should stay open; write an expression for a position
/// that should be fixed now. The result is a closure over exactly the
/// open positions, in their original relative order, that invokes the
/// original callable with every argument back in its original position.
///
/// **Important**: Do NOT import `applique::partial::__`. The `__` is
/// matched as a literal token by the macro.
///
/// # Syntax
///
/// For a 3-argument function `f(a, b, c)`:
/// - `partial!(f, v, __, __)` creates `|b, c| f(v, b, c)`
/// - `partial!(f, __, v, __)` creates `|a, c| f(a, v, c)`
/// - `partial!(f, v1, __, v3)` creates `|b| f(v1, b, v3)`
/// - `partial!(f, v1, v2, v3)` creates `|| f(v1, v2, v3)` (thunk)
/// - `partial!(f, __, __, __)` creates `|a, b, c| f(a, b, c)` (identity)
///
/// The same shape scales to any callable of up to sixteen parameters,
/// with any mix of fixed and open positions.
///
/// # Evaluation Order
///
/// Fixed-value expressions are evaluated exactly once, at the binding
/// site, left to right, not when the reduced closure runs.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the reduced closure may be
///   called multiple times; use [`partial_once!`](crate::partial_once)
///   for values that cannot be cloned)
/// - The original callable must implement [`Fn`]
///
/// # Examples
///
/// ## Fixing a leading argument
///
/// ```
/// use applique::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing a trailing argument
///
/// ```
/// use applique::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## Fixing an interior argument
///
/// ```
/// use applique::partial;
///
/// fn describe(count: usize, noun: &str, place: &str) -> String {
///     format!("{count} {noun} in {place}")
/// }
///
/// let birds_somewhere = partial!(describe, __, "birds", __);
/// assert_eq!(birds_somewhere(3, "the yard"), "3 birds in the yard");
/// ```
///
/// ## Side-effecting callables
///
/// The shape of the callable does not matter; one that returns `()`
/// works the same way:
///
/// ```
/// use applique::partial;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let record = |tag: &str, value: i32| log.borrow_mut().push((tag.to_owned(), value));
///
/// let record_depth = partial!(&record, "depth", __);
/// record_depth(7);
/// record_depth(9);
/// assert_eq!(*log.borrow(), [("depth".to_owned(), 7), ("depth".to_owned(), 9)]);
/// ```
///
/// ## Wide callables
///
/// ```
/// use applique::partial;
///
/// fn checksum(a: u32, b: u32, c: u32, d: u32, e: u32, f: u32, g: u32, h: u32) -> u32 {
///     a ^ b ^ c ^ d ^ e ^ f ^ g ^ h
/// }
///
/// let seeded = partial!(checksum, 1, __, 2, __, 3, __, 4, __);
/// assert_eq!(seeded(0, 0, 0, 0), 1 ^ 2 ^ 3 ^ 4);
/// ```
///
/// A reduced closure only accepts as many arguments as there are open
/// positions:
///
/// ```compile_fail
/// use applique::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// add_five(1, 2); // one open position, two arguments
/// ```
///
/// Fixed values that cannot be cloned are rejected; see
/// [`partial_once!`](crate::partial_once) for those:
///
/// ```compile_fail
/// use applique::partial;
///
/// struct Session(Vec<u8>); // deliberately not Clone
///
/// fn open(session: Session, port: u16) -> usize {
///     session.0.len() + port as usize
/// }
///
/// let on_port = partial!(open, Session(vec![1, 2]), __);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr, $($slots:tt)+) => {{
        let function = $function;
        $crate::__applique_slots!(@clone (function) [] []
            [__slot01 __slot02 __slot03 __slot04 __slot05 __slot06 __slot07 __slot08
             __slot09 __slot10 __slot11 __slot12 __slot13 __slot14 __slot15 __slot16]
            $($slots)+)
    }};
}

/// Shared expansion engine for [`partial!`] and
/// [`partial_once!`](crate::partial_once).
///
/// Walks the slot list once, accumulating the reduced closure's
/// parameters and the argument list of the forwarded call. The head of
/// the identifier pool names the current position; the pool running dry
/// is the arity limit.
#[doc(hidden)]
#[macro_export]
macro_rules! __applique_slots {
    // Open slot: the position becomes a parameter of the reduced closure.
    (@$mode:ident ($function:ident) [$($param:ident)*] [$($call:expr,)*]
     [$next:ident $($pool:ident)*] __ $(, $($rest:tt)*)?) => {
        $crate::__applique_slots!(@$mode ($function)
            [$($param)* $next] [$($call,)* $next,] [$($pool)*] $($($rest)*)?)
    };
    // Fixed slot, clone flavor: evaluate now, clone on every call.
    (@clone ($function:ident) [$($param:ident)*] [$($call:expr,)*]
     [$next:ident $($pool:ident)*] $value:expr $(, $($rest:tt)*)?) => {{
        let $next = $value;
        $crate::__applique_slots!(@clone ($function)
            [$($param)*] [$($call,)* $next.clone(),] [$($pool)*] $($($rest)*)?)
    }};
    // Fixed slot, once flavor: evaluate now, move into the single call.
    (@once ($function:ident) [$($param:ident)*] [$($call:expr,)*]
     [$next:ident $($pool:ident)*] $value:expr $(, $($rest:tt)*)?) => {{
        let $next = $value;
        $crate::__applique_slots!(@once ($function)
            [$($param)*] [$($call,)* $next,] [$($pool)*] $($($rest)*)?)
    }};
    // Every slot consumed: emit the reduced closure. The accumulated
    // call list restores each argument to its original position.
    (@$mode:ident ($function:ident) [$($param:ident)*] [$($call:expr,)*]
     [$($pool:ident)*]) => {
        move |$($param),*| $function($($call),*)
    };
}
