/// Wraps `transform` so it only ever sees a clone of its argument.
///
/// The wrapped function takes the argument by reference and hands an owned
/// clone to `transform`, so whatever `transform` does to its input is never
/// visible to the caller.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::mutation_free;
///
/// let mut appended = mutation_free(|mut list: Vec<i32>| {
///     list.push(4);
///     list
/// });
///
/// let list = vec![1, 2, 3];
/// assert_eq!(appended(&list), vec![1, 2, 3, 4]);
/// assert_eq!(list, vec![1, 2, 3]);
/// ```
pub fn mutation_free<A, U, F>(mut transform: F) -> impl FnMut(&A) -> U
where
    A: Clone,
    F: FnMut(A) -> U,
{
    move |arg: &A| transform(arg.clone())
}

/// Wraps `transform` so each call emits a `WARN` event naming the deprecated
/// function before forwarding the call unchanged.
///
/// # Examples
///
/// ```
/// use chain_rail::wrappers::deprecated;
/// use chain_rail::Chainable;
///
/// let old_double = deprecated("old_double", |x: i32| x * 2);
/// assert_eq!(Chainable::new(4).apply(old_double).unwrap(), 8);
/// ```
pub fn deprecated<A, U, F>(name: &'static str, mut transform: F) -> impl FnMut(A) -> U
where
    F: FnMut(A) -> U,
{
    move |arg: A| {
        tracing::warn!(function = name, "{} has been marked as deprecated", name);
        transform(arg)
    }
}
