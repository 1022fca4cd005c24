//! Helpers for re-raising failures of arbitrary logic as enriched errors.
//!
//! Key features:
//! - [`with_helpful_error`] wraps a `Result`-returning closure so that any
//!   error it returns is replaced by a [`HelpfulError`] carrying it as cause.
//! - [`with_helpful_error_async`] does the same for `Future`-returning
//!   closures; the rewrap happens when the future resolves.
//! - [`HelpfulError::wrap`] / [`HelpfulError::wrap_async`] fix the variant
//!   from the type they are called on.
//!
//! Whether logic is synchronous or asynchronous is decided by what it returns,
//! not by how it is declared: an `async` block, a hand-written `Future`, or a
//! closure returning `Box::pin(..)` are all handled by the async entry points.
//!
//! Success values pass through untouched and no error is built for them.
//! Panics are not failures in this sense and propagate unchanged.

use core::marker::PhantomData;
use std::error::Error;

use crate::types::{Cause, Helpful, HelpfulError, Metadata, Variant};

#[cfg(feature = "async")]
use crate::async_ext::WrapFuture;
#[cfg(feature = "async")]
use core::future::Future;

/// Message, metadata and variant used when a failure is rewrapped.
///
/// # Examples
///
/// ```
/// use helpful_errors::{metadata, BadRequest, WrapOptions};
///
/// let options = WrapOptions::new("request validation failed")
///     .with_metadata(metadata! { "field": "email" })
///     .variant::<BadRequest>();
///
/// assert_eq!(options.message(), "request validation failed");
/// ```
#[must_use]
pub struct WrapOptions<V: Variant = Helpful> {
    message: String,
    metadata: Metadata,
    variant: PhantomData<fn() -> V>,
}

impl WrapOptions<Helpful> {
    /// Creates options for the base variant with empty metadata.
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { message: message.into(), metadata: Metadata::new(), variant: PhantomData }
    }
}

impl<V: Variant> WrapOptions<V> {
    /// Replaces the metadata attached to the rewrapped error.
    #[inline]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Switches the variant of the rewrapped error.
    #[inline]
    pub fn variant<W: Variant>(self) -> WrapOptions<W> {
        WrapOptions { message: self.message, metadata: self.metadata, variant: PhantomData }
    }

    /// Message of the rewrapped error, before any variant prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Metadata attached to every rewrapped error; the cause is added per failure.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Builds the error that replaces `error`, leaving the options reusable.
    pub fn raise<E>(&self, error: E) -> HelpfulError<V>
    where
        E: Error + Send + Sync + 'static,
    {
        trace_rewrap::<V, E>(&self.message, &error);
        let metadata = self.metadata.clone().with_shared_cause(Cause::new(error));
        HelpfulError::with_metadata(self.message.clone(), metadata)
    }

    /// Builds the error that replaces `error`, consuming the options.
    pub fn into_error<E>(self, error: E) -> HelpfulError<V>
    where
        E: Error + Send + Sync + 'static,
    {
        trace_rewrap::<V, E>(&self.message, &error);
        let metadata = self.metadata.with_shared_cause(Cause::new(error));
        HelpfulError::with_metadata(self.message, metadata)
    }
}

impl<V: Variant> Clone for WrapOptions<V> {
    fn clone(&self) -> Self {
        Self { message: self.message.clone(), metadata: self.metadata.clone(), variant: PhantomData }
    }
}

impl<V: Variant> core::fmt::Debug for WrapOptions<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WrapOptions")
            .field("variant", &V::NAME)
            .field("message", &self.message)
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[cfg(feature = "tracing")]
#[inline]
fn trace_rewrap<V: Variant, E: Error>(message: &str, error: &E) {
    tracing::debug!(
        variant = V::NAME.unwrap_or("HelpfulError"),
        context = message,
        cause = %error,
        "rewrapping failure as helpful error"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_rewrap<V: Variant, E: Error>(_message: &str, _error: &E) {}

/// Wraps synchronous logic so its errors are rewrapped as [`HelpfulError`]s.
///
/// The returned closure takes the same argument as `logic` (use a tuple for
/// several, `()` for none) and returns `logic`'s value unchanged on success.
///
/// # Examples
///
/// ```
/// use helpful_errors::{metadata, with_helpful_error, WrapOptions};
///
/// let parse = with_helpful_error(
///     |input: &str| input.parse::<u32>(),
///     WrapOptions::new("could not parse port").with_metadata(metadata! { "field": "port" }),
/// );
///
/// assert_eq!(parse("8080").unwrap(), 8080);
///
/// let err = parse("eighty").unwrap_err();
/// assert!(err.to_string().contains("could not parse port"));
/// assert!(err.cause().unwrap().is::<std::num::ParseIntError>());
/// ```
pub fn with_helpful_error<F, A, T, E, V>(
    logic: F,
    options: WrapOptions<V>,
) -> impl Fn(A) -> Result<T, HelpfulError<V>>
where
    F: Fn(A) -> Result<T, E>,
    E: Error + Send + Sync + 'static,
    V: Variant,
{
    move |args| logic(args).map_err(|error| options.raise(error))
}

/// Wraps asynchronous logic so the errors its futures resolve to are
/// rewrapped as [`HelpfulError`]s.
///
/// Invoking the returned closure calls `logic` immediately and returns a
/// [`WrapFuture`] around the future it produced.
///
/// # Examples
///
/// ```
/// use helpful_errors::{metadata, with_helpful_error_async, WrapOptions};
///
/// # async fn demo() {
/// let double = with_helpful_error_async(
///     |value: i64| async move {
///         if value < 0 {
///             return Err(std::io::Error::other("negative value"));
///         }
///         Ok(value * 2)
///     },
///     WrapOptions::new("could not double value").with_metadata(metadata! { "operation": "double" }),
/// );
///
/// assert_eq!(double(5).await.unwrap(), 10);
/// assert!(double(-1).await.is_err());
/// # }
/// ```
#[cfg(feature = "async")]
pub fn with_helpful_error_async<F, A, Fut, T, E, V>(
    logic: F,
    options: WrapOptions<V>,
) -> impl Fn(A) -> WrapFuture<Fut, V>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Error + Send + Sync + 'static,
    V: Variant,
{
    move |args| WrapFuture::new(logic(args), options.clone())
}

impl<V: Variant> HelpfulError<V> {
    /// [`with_helpful_error`] with the variant fixed to `V`.
    ///
    /// # Examples
    ///
    /// ```
    /// use helpful_errors::{BadRequestError, WrapOptions};
    ///
    /// let parse = BadRequestError::wrap(|s: &str| s.parse::<u8>(), WrapOptions::new("bad age"));
    /// let err = parse("300").unwrap_err();
    /// assert!(err.to_string().starts_with("BadRequestError: bad age"));
    /// ```
    pub fn wrap<F, A, T, E, W>(logic: F, options: WrapOptions<W>) -> impl Fn(A) -> Result<T, Self>
    where
        F: Fn(A) -> Result<T, E>,
        E: Error + Send + Sync + 'static,
        W: Variant,
    {
        with_helpful_error(logic, options.variant::<V>())
    }

    /// [`with_helpful_error_async`] with the variant fixed to `V`.
    #[cfg(feature = "async")]
    pub fn wrap_async<F, A, Fut, T, E, W>(
        logic: F,
        options: WrapOptions<W>,
    ) -> impl Fn(A) -> WrapFuture<Fut, V>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Error + Send + Sync + 'static,
        W: Variant,
    {
        with_helpful_error_async(logic, options.variant::<V>())
    }
}
