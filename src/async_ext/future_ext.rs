//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.helpful()` and `.helpful_with()` for futures, mirroring
//! the sync `ResultExt` trait.

use core::future::Future;
use std::error::Error;

use crate::types::{HelpfulError, Variant};
use crate::wrap::WrapOptions;

use super::wrap_future::WrapFuture;

/// Extension trait for rewrapping the errors of `Result`-returning futures.
///
/// This trait mirrors the sync [`ResultExt`](crate::traits::ResultExt) trait.
///
/// # Examples
///
/// ```rust,no_run
/// use helpful_errors::prelude_async::*;
///
/// async fn fetch_from_db(_id: u64) -> Result<String, std::io::Error> {
///     Err(std::io::Error::other("connection reset"))
/// }
///
/// async fn fetch_user(id: u64) -> HelpfulResult<String> {
///     fetch_from_db(id)
///         .helpful(WrapOptions::new("could not fetch user").with_metadata(metadata! { "user_id": id }))
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Rewraps the future's error with the given options.
    fn helpful<V: Variant>(self, options: WrapOptions<V>) -> WrapFuture<Self, V>;

    /// Rewraps the future's error with lazily built options.
    ///
    /// The closure is only called when the future resolves to an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helpful_errors::prelude_async::*;
    ///
    /// async fn example(order_id: u64) {
    ///     let result = async { Err::<(), _>(std::io::Error::other("timeout")) }
    ///         .helpful_with(|| {
    ///             WrapOptions::new(format!("validating order {order_id}"))
    ///         })
    ///         .await;
    ///     assert!(result.is_err());
    /// }
    /// ```
    fn helpful_with<V, F>(self, f: F) -> impl Future<Output = Result<T, HelpfulError<V>>>
    where
        V: Variant,
        F: FnOnce() -> WrapOptions<V>;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn helpful<V: Variant>(self, options: WrapOptions<V>) -> WrapFuture<Self, V> {
        WrapFuture::new(self, options)
    }

    fn helpful_with<V, F>(self, f: F) -> impl Future<Output = Result<T, HelpfulError<V>>>
    where
        V: Variant,
        F: FnOnce() -> WrapOptions<V>,
    {
        async move { self.await.map_err(|err| f().into_error(err)) }
    }
}
