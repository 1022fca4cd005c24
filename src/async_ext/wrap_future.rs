//! Future wrapper that rewraps failures once the inner future resolves.
//!
//! This module provides `WrapFuture`, which wraps a `Future<Output = Result<T, E>>`
//! and replaces an `Err` with a [`HelpfulError`] carrying it as cause.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::error::Error;

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::{HelpfulError, Variant};
use crate::wrap::WrapOptions;

pin_project! {
    /// A Future wrapper that rewraps an error result as a [`HelpfulError`].
    ///
    /// The error is built only after the inner future has resolved to an
    /// error, and at most once.
    ///
    /// # Cancel Safety
    ///
    /// `WrapFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helpful_errors::prelude_async::*;
    ///
    /// async fn example() -> HelpfulResult<i32> {
    ///     async { Err::<i32, _>(std::io::Error::other("disk gone")) }
    ///         .helpful(WrapOptions::new("could not read counter"))
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, V: Variant> {
        #[pin]
        future: Fut,
        options: Option<WrapOptions<V>>,
    }
}

impl<Fut, V: Variant> WrapFuture<Fut, V> {
    /// Creates a new `WrapFuture` around `future`.
    #[inline]
    pub fn new(future: Fut, options: WrapOptions<V>) -> Self {
        Self { future, options: Some(options) }
    }
}

impl<Fut, V, T, E> Future for WrapFuture<Fut, V>
where
    Fut: Future<Output = Result<T, E>>,
    V: Variant,
    E: Error + Send + Sync + 'static,
{
    type Output = Result<T, HelpfulError<V>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let options = this.options.take();
            res.map_err(|err| {
                options
                    .expect("WrapFuture polled after completion; this is a bug")
                    .into_error(err)
            })
        })
    }
}

impl<Fut, V, T, E> FusedFuture for WrapFuture<Fut, V>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    V: Variant,
    E: Error + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        // options are taken on completion, whichever way it went
        self.options.is_none() || self.future.is_terminated()
    }
}
