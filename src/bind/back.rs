//! Binders that fix the trailing parameter of a callable.
//!
//! Mirror image of [`front`](super::front): one function per callable
//! arity from 2 to 16, fixing the last position instead of the first.

macro_rules! define_bind_back {
    ($arity:literal => $($init:ident),+ ; $tail:ident) => {
        paste::paste! {
            #[doc = concat!(
                "Fixes the last parameter of a ", stringify!($arity),
                "-parameter callable.\n\n",
                "Returns a closure over the leading ",
                "parameters, in their original order, that invokes the ",
                "callable with the fixed value cloned back into the trailing ",
                "position on every call.",
            )]
            #[inline]
            #[allow(non_snake_case)]
            pub fn [<bind_back $arity>]<Function, Output, $($init),+, $tail>(
                function: Function,
                tail: $tail,
            ) -> impl Fn($($init),+) -> Output
            where
                Function: Fn($($init,)+ $tail) -> Output,
                $tail: Clone,
            {
                move |$($init),+| function($($init,)+ tail.clone())
            }
        }
    };
}

define_bind_back!(2 => A; B);
define_bind_back!(3 => A, B; C);
define_bind_back!(4 => A, B, C; D);
define_bind_back!(5 => A, B, C, D; E);
define_bind_back!(6 => A, B, C, D, E; F);
define_bind_back!(7 => A, B, C, D, E, F; G);
define_bind_back!(8 => A, B, C, D, E, F, G; H);
define_bind_back!(9 => A, B, C, D, E, F, G, H; I);
define_bind_back!(10 => A, B, C, D, E, F, G, H, I; J);
define_bind_back!(11 => A, B, C, D, E, F, G, H, I, J; K);
define_bind_back!(12 => A, B, C, D, E, F, G, H, I, J, K; L);
define_bind_back!(13 => A, B, C, D, E, F, G, H, I, J, K, L; M);
define_bind_back!(14 => A, B, C, D, E, F, G, H, I, J, K, L, M; N);
define_bind_back!(15 => A, B, C, D, E, F, G, H, I, J, K, L, M, N; O);
define_bind_back!(16 => A, B, C, D, E, F, G, H, I, J, K, L, M, N, O; P);

#[cfg(test)]
mod tests {
    use super::*;

    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    #[test]
    fn fixes_the_trailing_position() {
        let half = bind_back2(divide, 2.0);
        assert!((half(10.0) - 5.0).abs() < f64::EPSILON);
        assert!((half(7.0) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn leading_positions_keep_their_order() {
        fn sentence(subject: &str, verb: &str, object: &str) -> String {
            format!("{subject} {verb} {object}")
        }

        let chase_mice = bind_back3(sentence, "mice");
        assert_eq!(chase_mice("cats", "chase"), "cats chase mice");
    }

    #[test]
    fn covers_the_widest_arity() {
        #[allow(clippy::too_many_arguments)]
        fn last_wins(
            _a: i32, _b: i32, _c: i32, _d: i32, _e: i32, _f: i32, _g: i32, _h: i32,
            _i: i32, _j: i32, _k: i32, _l: i32, _m: i32, _n: i32, _o: i32, p: i32,
        ) -> i32 {
            p
        }

        let sealed = bind_back16(last_wins, 99);
        assert_eq!(sealed(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0), 99);
    }
}
