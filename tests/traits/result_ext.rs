use helpful_errors::traits::ResultExt;
use helpful_errors::{metadata, HelpfulError, WrapOptions};
use std::io;

#[test]
fn test_helpful_on_err() {
    let result: Result<(), io::Error> = Err(io::Error::other("original"));
    let err = result
        .helpful(WrapOptions::new("context added").with_metadata(metadata! { "step": 1 }))
        .unwrap_err();

    assert!(err.to_string().starts_with("context added\n\n"));
    assert_eq!(err.cause().unwrap().to_string(), "original");
}

#[test]
fn test_helpful_on_ok() {
    let result: Result<i32, io::Error> = Ok(42);

    assert_eq!(result.helpful(WrapOptions::new("should not appear")).unwrap(), 42);
}

#[test]
fn test_helpful_with_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), io::Error> = Ok(());

    let _ = result.helpful_with(|| {
        called = true;
        WrapOptions::new("should not be called")
    });
    assert!(!called, "closure for helpful_with should not be called on Ok result");
}

#[test]
fn test_helpful_with_lazy_on_err() {
    let mut called = false;
    let result: Result<(), io::Error> = Err(io::Error::other("error"));

    let err = result
        .helpful_with(|| {
            called = true;
            WrapOptions::new("lazy context")
        })
        .unwrap_err();
    assert!(called);
    assert_eq!(err.to_string(), "lazy context");
}

#[test]
fn test_rewrapping_a_helpful_error_nests_causes() {
    let inner: Result<(), HelpfulError> = Err(HelpfulError::new("inner"));
    let outer = inner.helpful(WrapOptions::new("outer")).unwrap_err();

    let cause = outer.cause().unwrap();
    assert!(cause.is::<HelpfulError>());
    assert_eq!(cause.downcast_ref::<HelpfulError>().unwrap().message(), "inner");
}
