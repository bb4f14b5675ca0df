//! Binders that fix the leading parameter of a callable.
//!
//! One function per callable arity from 2 to 16, generated from a single
//! definition over an identifier list. The suffix in each name is the
//! parameter count of the callable being bound.

macro_rules! define_bind_front {
    ($arity:literal => $head:ident, $($rest:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Fixes the first parameter of a ", stringify!($arity),
                "-parameter callable.\n\n",
                "Returns a closure over the remaining ",
                "parameters, in their original order, that invokes the ",
                "callable with the fixed value cloned back into the leading ",
                "position on every call.",
            )]
            #[inline]
            #[allow(non_snake_case)]
            pub fn [<bind_front $arity>]<Function, Output, $head, $($rest),+>(
                function: Function,
                head: $head,
            ) -> impl Fn($($rest),+) -> Output
            where
                Function: Fn($head, $($rest),+) -> Output,
                $head: Clone,
            {
                move |$($rest),+| function(head.clone(), $($rest),+)
            }
        }
    };
}

define_bind_front!(2 => A, B);
define_bind_front!(3 => A, B, C);
define_bind_front!(4 => A, B, C, D);
define_bind_front!(5 => A, B, C, D, E);
define_bind_front!(6 => A, B, C, D, E, F);
define_bind_front!(7 => A, B, C, D, E, F, G);
define_bind_front!(8 => A, B, C, D, E, F, G, H);
define_bind_front!(9 => A, B, C, D, E, F, G, H, I);
define_bind_front!(10 => A, B, C, D, E, F, G, H, I, J);
define_bind_front!(11 => A, B, C, D, E, F, G, H, I, J, K);
define_bind_front!(12 => A, B, C, D, E, F, G, H, I, J, K, L);
define_bind_front!(13 => A, B, C, D, E, F, G, H, I, J, K, L, M);
define_bind_front!(14 => A, B, C, D, E, F, G, H, I, J, K, L, M, N);
define_bind_front!(15 => A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
define_bind_front!(16 => A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
