//! Manual polling of the future adapters.

use std::future::Future;
use std::io;
use std::pin::{pin, Pin};
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

use futures_core::future::FusedFuture;
use helpful_errors::async_ext::FutureResultExt;
use helpful_errors::testing::get_error_async;
use helpful_errors::traits::ResultExt;
use helpful_errors::WrapOptions;

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

/// Pending on the first poll, then ready with `result`.
struct YieldOnce<T> {
    result: Option<T>,
    yielded: bool,
}

impl<T: Unpin> Future for YieldOnce<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(self.result.take().expect("polled after completion"))
    }
}

impl<T: Unpin> FusedFuture for YieldOnce<T> {
    fn is_terminated(&self) -> bool {
        self.yielded && self.result.is_none()
    }
}

fn yield_once<T>(result: T) -> YieldOnce<T> {
    YieldOnce { result: Some(result), yielded: false }
}

#[test]
fn wrap_future_builds_error_only_once_ready() {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);

    let mut fut = pin!(yield_once(Err::<(), _>(io::Error::other("late")))
        .helpful(WrapOptions::new("slow operation")));

    assert!(fut.as_mut().poll(&mut cx).is_pending());
    assert!(!fut.is_terminated());

    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(Err(err)) => assert_eq!(err.cause().unwrap().to_string(), "late"),
        other => panic!("expected a rewrapped error, got {other:?}"),
    }
    assert!(fut.is_terminated());
}

#[test]
fn capture_future_reports_termination() {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);

    let mut fut = pin!(get_error_async(yield_once(Ok::<u8, io::Error>(1))));

    assert!(fut.as_mut().poll(&mut cx).is_pending());
    assert!(!fut.is_terminated());

    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(Err(sentinel)) => assert_eq!(sentinel.to_string(), "no error was thrown"),
        other => panic!("expected the sentinel, got {other:?}"),
    }
    assert!(fut.is_terminated());
}

#[test]
fn sync_and_async_extensions_agree() {
    let sync = Err::<(), _>(io::Error::other("same"))
        .helpful(WrapOptions::new("ctx"))
        .unwrap_err();

    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(std::future::ready(Err::<(), _>(io::Error::other("same")))
        .helpful(WrapOptions::new("ctx")));

    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(Err(err)) => assert_eq!(err.to_string(), sync.to_string()),
        other => panic!("expected a rewrapped error, got {other:?}"),
    }
}

#[test]
#[should_panic(expected = "CaptureFuture polled after completion")]
fn capture_future_refuses_to_poll_twice() {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);

    let mut fut = pin!(get_error_async(std::future::ready(Err::<(), _>(io::Error::other("x")))));

    assert!(fut.as_mut().poll(&mut cx).is_ready());
    let _ = fut.as_mut().poll(&mut cx);
}
