use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::NoErrorThrownError;

use super::no_error_thrown;

pin_project! {
    /// Future returned by [`get_error_async`](super::get_error_async).
    ///
    /// Resolves to `Ok(error)` when the inner future fails and to the
    /// [`NoErrorThrownError`] sentinel when it succeeds. Polling it again
    /// after it resolved panics.
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureFuture<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut> CaptureFuture<Fut> {
    /// Creates a new `CaptureFuture` around `future`.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, done: false }
    }
}

impl<Fut, T, E> Future for CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<E, NoErrorThrownError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "CaptureFuture polled after completion; this is a bug");

        this.future.poll(cx).map(|res| {
            *this.done = true;
            match res {
                Ok(_) => Err(no_error_thrown()),
                Err(error) => Ok(error),
            }
        })
    }
}

impl<Fut, T, E> FusedFuture for CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
