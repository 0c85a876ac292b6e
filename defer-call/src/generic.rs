/// A function that can be called with the argument tuple `Args`.
///
/// Implemented for every `Fn` of arity 0 through 16, where the arguments are
/// packed into a tuple: `()`, `(A,)`, `(A, B)` and so on.
pub trait Func<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

// Each argument is taken from the tuple by index, in declaration order.
macro_rules! impl_func {
    ($( $T:ident $idx:tt ),*) => {
        impl<F, R, $( $T ),*> Func<($( $T, )*)> for F
        where
            F: Fn($( $T ),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(unused_variables)]
            fn call(&self, args: ($( $T, )*)) -> Self::Output {
                (*self)($( args.$idx ),*)
            }
        }
    };
}

impl_func!();
impl_func!(A 0);
impl_func!(A 0, B 1);
impl_func!(A 0, B 1, C 2);
impl_func!(A 0, B 1, C 2, D 3);
impl_func!(A 0, B 1, C 2, D 3, E 4);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9, L 10);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11, N 12);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11, N 12, O 13);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11, N 12, O 13, P 14);
impl_func!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11, N 12, O 13, P 14, Q 15);
