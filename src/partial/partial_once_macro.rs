//! The `partial_once!` macro: the move flavor of partial application.

/// Partially applies arguments to a callable, moving the fixed values.
///
/// Same slot grammar as [`partial!`](crate::partial!): one slot per
/// parameter, `__` for a position that stays open, an expression for a
/// position fixed now. The difference is capture semantics: fixed
/// values are moved into the final invocation instead of cloned on each
/// call. That lifts the [`Clone`] requirement, and in exchange the
/// reduced closure implements only [`FnOnce`]: it can be called exactly
/// once.
///
/// **Important**: Do NOT import `applique::partial::__`. The `__` is
/// matched as a literal token by the macro.
///
/// # Evaluation Order
///
/// As with [`partial!`](crate::partial!), fixed-value expressions are
/// evaluated exactly once, at the binding site, left to right.
///
/// # Type Requirements
///
/// - The original callable must implement [`FnOnce`]
/// - Fixed values have no trait requirements
///
/// # Examples
///
/// ## Fixing a value that cannot be cloned
///
/// ```
/// use applique::partial_once;
///
/// struct Session(Vec<u8>); // deliberately not Clone
///
/// fn transmit(session: Session, retries: u32) -> usize {
///     session.0.len() + retries as usize
/// }
///
/// let send = partial_once!(transmit, Session(vec![1, 2, 3]), __);
/// assert_eq!(send(2), 5);
/// ```
///
/// ## Deferring the non-clonable position
///
/// ```
/// use applique::partial_once;
///
/// fn label(name: String, id: u64) -> String {
///     format!("{name}#{id}")
/// }
///
/// let tag_record = partial_once!(label, __, 42);
/// assert_eq!(tag_record(String::from("order")), "order#42");
/// ```
///
/// The reduced closure is consumed by its first call:
///
/// ```compile_fail
/// use applique::partial_once;
///
/// fn swallow(value: String, times: usize) -> usize {
///     value.len() * times
/// }
///
/// let once = partial_once!(swallow, String::from("gone"), __);
/// once(1);
/// once(2); // use of moved value
/// ```
#[macro_export]
macro_rules! partial_once {
    ($function:expr, $($slots:tt)+) => {{
        let mut function = $function;
        $crate::__applique_slots!(@once (function) [] []
            [__slot01 __slot02 __slot03 __slot04 __slot05 __slot06 __slot07 __slot08
             __slot09 __slot10 __slot11 __slot12 __slot13 __slot14 __slot15 __slot16]
            $($slots)+)
    }};
}

#[cfg(test)]
mod tests {
    struct Opaque(i32);

    fn unwrap_and_add(opaque: Opaque, extra: i32) -> i32 {
        opaque.0 + extra
    }

    #[test]
    fn moves_a_non_clone_value_into_the_call() {
        let complete = partial_once!(unwrap_and_add, Opaque(40), __);
        assert_eq!(complete(2), 42);
    }

    #[test]
    fn defers_the_non_clone_position() {
        let complete = partial_once!(unwrap_and_add, __, 2);
        assert_eq!(complete(Opaque(40)), 42);
    }

    #[test]
    fn fixes_every_position_into_a_thunk() {
        let thunk = partial_once!(unwrap_and_add, Opaque(1), 2);
        assert_eq!(thunk(), 3);
    }
}
