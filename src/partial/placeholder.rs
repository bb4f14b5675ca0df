//! The placeholder marker for deferred argument positions.

/// Marker type for an argument position that stays open.
///
/// A slot written as `__` in a [`partial!`](crate::partial!) or
/// [`partial_once!`](crate::partial_once) invocation marks that position
/// as *deferred*: the position becomes a parameter of the reduced
/// callable instead of being fixed at the binding site.
///
/// The macros match `__` as a literal token, so this type only matters
/// when a placeholder needs to exist as a value, e.g. when a table of
/// binding patterns is built programmatically.
///
/// # Examples
///
/// ```
/// use applique::partial;
///
/// fn join(left: &str, right: &str) -> String {
///     format!("{left}{right}")
/// }
///
/// // Use __ directly as a placeholder - do NOT import it
/// let exclaim = partial!(join, __, "!");
/// assert_eq!(exclaim("hey"), "hey!");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// **Important**: Do NOT import this constant when using
/// [`partial!`](crate::partial!) or [`partial_once!`](crate::partial_once).
/// The macros match `__` as a literal token; importing this constant
/// would shadow the literal and change how the slot is parsed.
///
/// Note: This is named `__` (double underscore) because Rust's
/// `macro_rules!` cannot match a single underscore `_` as a literal
/// token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

// The marker must stay freely copyable and shareable; the reduced
// closures are exactly as thread-safe as what they capture.
static_assertions::assert_impl_all!(Placeholder: Copy, Send, Sync);
