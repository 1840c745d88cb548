//! Reified transform failures.
//!
//! Whatever error a transform returns (or, with the `std` feature, whatever
//! panic it raises) is turned into a [`TransformError`] that remembers the
//! [`ErrorKind`] of the original failure, so callers can later filter on it.

use core::any::{Any, TypeId};
use core::fmt::{Debug, Display};
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::{Box, BoxError, Cow, String};
use crate::types::ErrorVec;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// The kind of a failure: the concrete error type a transform produced.
///
/// Kinds compare by [`TypeId`], so every error of one type shares a kind.
/// A kind built with [`ErrorKind::of`] also recognises its type behind a
/// boxed error, so a transform that returns `Box<dyn Error + Send + Sync>`
/// through `?` still matches the kind of the error it boxed.
///
/// # Examples
///
/// ```
/// use chain_rail::{ErrorKind, ResultChain};
/// use core::num::ParseIntError;
///
/// let chain = ResultChain::new(String::from("x1")).apply(|s| s.parse::<u8>().map(|_| s));
///
/// let error = chain.error().unwrap();
/// assert_eq!(error.kind(), ErrorKind::of::<ParseIntError>());
/// assert_ne!(error.kind(), ErrorKind::of::<core::fmt::Error>());
/// ```
#[derive(Clone, Copy)]
pub struct ErrorKind {
    id: TypeId,
    name: &'static str,
    matches_source: fn(&(dyn core::error::Error + 'static)) -> bool,
}

impl ErrorKind {
    /// Returns the kind of errors of type `E`.
    #[inline]
    pub fn of<E: core::error::Error + 'static>() -> Self {
        Self { id: TypeId::of::<E>(), name: core::any::type_name::<E>(), matches_source: source_is::<E> }
    }

    /// Returns the kind of failures raised as values of type `E`, which need
    /// not implement [`Error`](core::error::Error) (`&str`, `String`).
    ///
    /// Such a kind only matches by the static type the transform returned.
    #[inline]
    pub fn of_type<E: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<E>(), name: core::any::type_name::<E>(), matches_source: no_source_match }
    }

    /// Type name of the error, for diagnostics only.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this kind is one of `kinds`.
    #[inline]
    pub fn is_any_of(&self, kinds: &[ErrorKind]) -> bool {
        kinds.contains(self)
    }

    /// Returns `true` if `error` is of this kind, either by the type its
    /// transform returned or by the concrete type of its boxed source.
    #[inline]
    pub fn matches(&self, error: &TransformError) -> bool {
        self.id == error.kind.id || (self.matches_source)(error.inner())
    }
}

fn source_is<E: core::error::Error + 'static>(source: &(dyn core::error::Error + 'static)) -> bool {
    source.is::<E>()
}

fn no_source_match(_source: &(dyn core::error::Error + 'static)) -> bool {
    false
}

impl PartialEq for ErrorKind {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ErrorKind").field(&self.name).finish()
    }
}

impl Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

/// A failure captured from a transform.
///
/// Holds the boxed original error, its [`ErrorKind`], and a stack of context
/// messages attached while the failure travelled through a pipeline.
///
/// `Display` renders the original error's description; [`error_chain`]
/// additionally lists the contexts, most recent first.
///
/// [`error_chain`]: TransformError::error_chain
pub struct TransformError {
    kind: ErrorKind,
    source: BoxError,
    context: ErrorVec<Cow<'static, str>>,
}

impl TransformError {
    /// Reifies `error`, recording `E` as the kind.
    ///
    /// An `error` that already is a `TransformError`, directly or boxed, is
    /// returned unchanged, so nested pipelines keep the kind of the innermost
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{ErrorKind, TransformError};
    /// use std::io;
    ///
    /// let err = TransformError::new(io::Error::new(io::ErrorKind::Other, "disk full"));
    /// assert_eq!(err.kind(), ErrorKind::of::<io::Error>());
    /// assert_eq!(err.to_string(), "disk full");
    /// assert!(err.is::<io::Error>());
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        let kind = ErrorKind::of_type::<E>();
        match error.into().downcast::<TransformError>() {
            Ok(inner) => *inner,
            Err(source) => Self { kind, source, context: ErrorVec::new() },
        }
    }

    /// Reifies a panic payload caught while running a transform.
    #[cfg_attr(not(feature = "std"), allow(dead_code))]
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::new(Panicked::from_payload(&*payload))
    }

    /// Returns the kind of the original failure.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the original failure was of type `E`, including an
    /// `E` the transform returned inside a boxed error.
    #[inline]
    pub fn is<E: core::error::Error + 'static>(&self) -> bool {
        ErrorKind::of::<E>().matches(self)
    }

    /// Returns `true` if the failure matches one of `kinds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{ErrorKind, TransformError};
    /// use core::num::ParseIntError;
    ///
    /// let boxed: Box<dyn std::error::Error + Send + Sync> = "12x".parse::<u8>().unwrap_err().into();
    /// let err = TransformError::new(boxed);
    /// assert!(err.is_any_of(&[ErrorKind::of::<core::fmt::Error>(), ErrorKind::of::<ParseIntError>()]));
    /// assert!(!err.is_any_of(&[]));
    /// ```
    #[inline]
    pub fn is_any_of(&self, kinds: &[ErrorKind]) -> bool {
        kinds.iter().any(|kind| kind.matches(self))
    }

    /// Returns the original error if it is of type `E`.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: core::error::Error + 'static,
    {
        self.source.downcast_ref::<E>()
    }

    /// Borrows the boxed original error.
    #[inline]
    pub fn inner(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Consumes the error, returning the boxed original error.
    #[inline]
    pub fn into_inner(self) -> BoxError {
        self.source
    }

    /// Pushes a context message onto the stack.
    #[inline]
    pub fn with_context<C>(mut self, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.context.push(context.into());
        self
    }

    /// Context messages in LIFO order (most recent first).
    #[inline]
    pub fn context(&self) -> impl Iterator<Item = &str> {
        self.context.iter().rev().map(|ctx| &**ctx)
    }

    /// Moves the context stack of `previous` under this error's own contexts.
    pub(crate) fn inherit_context(mut self, previous: TransformError) -> Self {
        let mut merged = previous.context;
        merged.extend(self.context);
        self.context = merged;
        self
    }

    /// Formats the contexts and the original error as one line.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::TransformError;
    ///
    /// let err = TransformError::new("boom").with_context("step 1").with_context("step 2");
    /// assert_eq!(err.error_chain(), "step 2 -> step 1 -> boom");
    /// ```
    pub fn error_chain(&self) -> String {
        let mut chain = String::new();
        for ctx in self.context() {
            chain.push_str(ctx);
            chain.push_str(" -> ");
        }
        chain.push_str(&self.source.to_string());
        chain
    }
}

impl Debug for TransformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransformError")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .field("context", &self.context)
            .finish()
    }
}

impl Display for TransformError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.source, f)
    }
}

impl core::error::Error for TransformError {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&*self.source)
    }
}

/// Errors compare by kind and description; the context stack is ignored.
impl PartialEq for TransformError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.source.to_string() == other.source.to_string()
    }
}

/// A panic raised inside a transform, captured with its message.
///
/// Only produced with the `std` feature enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Creates a record for a panic with `message`.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// The panic message, or `"unknown panic"` for non-string payloads.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[cfg_attr(not(feature = "std"), allow(dead_code))]
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::new(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(message.clone())
        } else {
            Self::new("unknown panic")
        }
    }
}

impl Display for Panicked {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Panicked {}

/// Returned by [`SequenceChain::reduce`](crate::SequenceChain::reduce) when an
/// empty sequence is reduced without an initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyReductionError;

impl Display for EmptyReductionError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("reduce of empty sequence with no initial value")
    }
}

impl core::error::Error for EmptyReductionError {}

/// Runs `transform`, reifying its error and any panic it raises.
///
/// The caller's stack is never unwound past this point.
#[cfg(feature = "std")]
pub(crate) fn capture<U, E, F>(transform: F) -> Result<U, TransformError>
where
    F: FnOnce() -> Result<U, E>,
    E: Into<BoxError> + 'static,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(transform)) {
        Ok(result) => result.map_err(TransformError::new),
        Err(payload) => Err(TransformError::from_panic(payload)),
    }
}

/// Runs `transform`, reifying its error. Panics propagate without `std`.
#[cfg(not(feature = "std"))]
pub(crate) fn capture<U, E, F>(transform: F) -> Result<U, TransformError>
where
    F: FnOnce() -> Result<U, E>,
    E: Into<BoxError> + 'static,
{
    transform().map_err(TransformError::new)
}
