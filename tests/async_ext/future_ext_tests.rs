//! Tests for FutureResultExt trait.

use helpful_errors::prelude_async::*;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

#[test]
fn wrap_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<WrapFuture<std::future::Ready<Result<(), io::Error>>, Helpful>>();
    assert_sync::<WrapFuture<std::future::Ready<Result<(), io::Error>>, BadRequest>>();
}

#[tokio::test]
async fn helpful_passes_success_through() {
    let result = async { Ok::<_, io::Error>(42) }
        .helpful(WrapOptions::new("never used"))
        .await;

    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn helpful_rewraps_failure() {
    let err = async { Err::<i32, _>(io::Error::other("connection reset")) }
        .helpful(WrapOptions::new("could not fetch user").with_metadata(metadata! { "user_id": 7 }))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("could not fetch user\n\n"));
    assert!(err.to_string().contains("user_id"));
    assert_eq!(err.cause().unwrap().to_string(), "connection reset");
}

#[tokio::test]
async fn helpful_with_does_not_evaluate_on_success() {
    let call_count = AtomicU32::new(0);

    let result = async { Ok::<_, io::Error>(42) }
        .helpful_with(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            WrapOptions::new("should not be called")
        })
        .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn helpful_with_evaluates_only_on_error() {
    let call_count = AtomicU32::new(0);

    let result = async { Err::<i32, _>(io::Error::other("failed")) }
        .helpful_with(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            WrapOptions::new("operation failed").variant::<BadRequest>()
        })
        .await;

    let err = result.unwrap_err();
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert_eq!(err.to_string(), "BadRequestError: operation failed");
}

#[tokio::test]
async fn helpful_works_across_await_points() {
    let err = async {
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        Err::<(), _>(io::Error::other("late"))
    }
    .helpful(WrapOptions::new("slow operation"))
    .await
    .unwrap_err();

    assert_eq!(err.cause().unwrap().to_string(), "late");
}
