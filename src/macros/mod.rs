/// Implements `PartialEq` between distinct container variants.
///
/// Containers of different variants never compare equal, even when they hold
/// identical data, so every generated impl returns `false`.
macro_rules! impl_variant_inequality {
    ($($lhs:ident => [$($rhs:ident),* $(,)?]);* $(;)?) => {
        $($(
            impl<T, U> PartialEq<$rhs<U>> for $lhs<T> {
                #[inline]
                fn eq(&self, _other: &$rhs<U>) -> bool {
                    false
                }
            }
        )*)*
    };
}

/// Implements `Shr` as an alias for `apply` on a container.
///
/// `container >> f` reads as "feed the held value into `f`". Only plain unary
/// transforms are accepted; use `apply_with` for argument injection.
macro_rules! impl_shr_apply {
    ($container:ident, $fn_trait:ident) => {
        impl<T, U, F> core::ops::Shr<F> for $container<T>
        where
            F: $fn_trait(T) -> U,
        {
            type Output = $container<U>;

            #[inline]
            fn shr(self, transform: F) -> Self::Output {
                self.apply(transform)
            }
        }
    };
}
