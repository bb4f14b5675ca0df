//! Placeholder-style partial application.
//!
//! This module provides macros that fix some arguments of a callable and
//! leave others open, producing a new callable over exactly the open
//! positions. It enables the point-free, configuration-up-front patterns
//! that are common in functional languages.
//!
//! # Overview
//!
//! The module provides the following utilities:
//!
//! - [`partial!`]: partial application with placeholder support; fixed
//!   values are cloned on each call, so the result is a reusable [`Fn`]
//! - [`partial_once!`]: the move flavor; fixed values are consumed on the
//!   single call, so non-[`Clone`] values work and the result is [`FnOnce`]
//! - [`Placeholder`] and [`__`]: the marker for deferred positions
//!
//! # Slot grammar
//!
//! Both macros take the callable followed by one *slot* per parameter, in
//! the callable's own parameter order. A slot is either the literal `__`
//! (the position stays open) or an expression (the position is fixed now):
//!
//! ```
//! use applique::partial;
//!
//! fn shelve(section: &str, shelf: u32, title: &str) -> String {
//!     format!("{section}/{shelf}: {title}")
//! }
//!
//! let fiction_top = partial!(shelve, "fiction", 1, __);
//! assert_eq!(fiction_top("Solaris"), "fiction/1: Solaris");
//!
//! let anywhere = partial!(shelve, __, __, "Solaris");
//! assert_eq!(anywhere("scifi", 4), "scifi/4: Solaris");
//! ```
//!
//! The resulting callable's parameters are the open positions in their
//! original relative order, and the original callable is always invoked
//! with every argument back in its original position.
//!
//! # Evaluation order
//!
//! Fixed-value expressions are evaluated exactly once, at the binding
//! site, left to right. Only the already-evaluated values are captured by
//! the returned closure:
//!
//! ```
//! use applique::partial;
//!
//! let mut trace = Vec::new();
//! let mut note = |tag: &str| {
//!     trace.push(tag.to_owned());
//!     tag.len()
//! };
//!
//! fn pair(first: usize, second: usize) -> (usize, usize) {
//!     (first, second)
//! }
//!
//! let bound = partial!(pair, note("left"), note("right"));
//! assert_eq!(trace, ["left", "right"]);
//! assert_eq!(bound(), (4, 5));
//! ```
//!
//! # Re-binding
//!
//! The result of a binding is an ordinary closure, so it can be bound
//! again. Binding in two steps is equivalent to binding the union of the
//! fixed positions in one step:
//!
//! ```
//! use applique::partial;
//!
//! fn weigh(a: i32, b: i32, c: i32) -> i32 {
//!     a * 100 + b * 10 + c
//! }
//!
//! let two_step = partial!(partial!(weigh, 1, __, __), 2, __);
//! let one_step = partial!(weigh, 1, 2, __);
//! assert_eq!(two_step(3), one_step(3));
//! ```
//!
//! # Supported arities
//!
//! Callables of up to sixteen parameters are supported; a seventeenth
//! slot fails to compile. The degenerate patterns are permitted: fixing
//! every position yields a zero-argument thunk, and deferring every
//! position yields an identity wrapper of the same arity.

mod partial_macro;
mod partial_once_macro;
mod placeholder;

// Re-export the placeholder marker
pub use placeholder::{__, Placeholder};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::partial;
pub use crate::partial_once;
