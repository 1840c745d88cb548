use crate::types::alloc_type::BoxError;
use crate::types::{ErrorKind, TransformError};

/// Wraps a fallible `transform` so every failure becomes `fallback`.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::coerce_into;
/// use chain_rail::Chainable;
///
/// let port = Chainable::new("http").apply(coerce_into(0_u16, |s: &str| s.parse::<u16>()));
/// assert_eq!(port.unwrap(), 0);
/// ```
pub fn coerce_into<A, U, E, F>(fallback: U, mut transform: F) -> impl FnMut(A) -> U
where
    U: Clone,
    F: FnMut(A) -> Result<U, E>,
{
    move |arg: A| match transform(arg) {
        Ok(value) => value,
        Err(_) => {
            tracing::trace!("coerced failure into fallback value");
            fallback.clone()
        },
    }
}

/// Wraps a fallible `transform` so failures for which `matches` holds become
/// `fallback`; other failures pass through unchanged.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::coerce_if;
/// use chain_rail::{ResultChain, TransformError};
/// use core::num::ParseIntError;
///
/// fn setting(raw: String) -> Result<String, TransformError> {
///     raw.parse::<u32>().map(|n| n.to_string()).map_err(TransformError::new)
/// }
///
/// let only_parse_errors = |e: &TransformError| e.is::<ParseIntError>();
/// let chain = ResultChain::new(String::from("abc"))
///     .apply(coerce_if(String::from("30"), only_parse_errors, setting));
/// assert_eq!(chain.unwrap().unwrap(), "30");
/// ```
pub fn coerce_if<A, U, E, P, F>(fallback: U, mut matches: P, mut transform: F) -> impl FnMut(A) -> Result<U, E>
where
    U: Clone,
    P: FnMut(&E) -> bool,
    F: FnMut(A) -> Result<U, E>,
{
    move |arg: A| match transform(arg) {
        Err(error) if matches(&error) => {
            tracing::trace!("coerced matching failure into fallback value");
            Ok(fallback.clone())
        },
        other => other,
    }
}

/// Wraps a fallible `transform` so failures matching one of `kinds` become
/// `fallback`. Other failures pass through as [`TransformError`]s. An empty
/// `kinds` coerces every failure.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::coerce_for;
/// use chain_rail::{ErrorKind, ResultChain};
/// use core::num::ParseIntError;
///
/// let port = |raw: String| raw.parse::<u16>().map(|p| p.to_string());
/// let chain = ResultChain::new(String::from("http"))
///     .apply(coerce_for(String::from("80"), &[ErrorKind::of::<ParseIntError>()], port));
/// assert_eq!(chain.unwrap().unwrap(), "80");
/// ```
pub fn coerce_for<A, U, E, F>(
    fallback: U,
    kinds: &[ErrorKind],
    mut transform: F,
) -> impl FnMut(A) -> Result<U, TransformError>
where
    U: Clone,
    E: Into<BoxError> + 'static,
    F: FnMut(A) -> Result<U, E>,
{
    let kinds = kinds.to_vec();
    coerce_if(
        fallback,
        move |error: &TransformError| kinds.is_empty() || error.is_any_of(&kinds),
        move |arg: A| transform(arg).map_err(TransformError::new),
    )
}
