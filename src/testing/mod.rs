//! Capture the error produced by a piece of logic, for assertions in tests.
//!
//! - [`get_error`] runs synchronous logic and hands back its error.
//! - [`get_error_async`] awaits a future and hands back its error.
//!
//! Both return `Err(`[`NoErrorThrownError`]`)` when the logic succeeded, so a
//! test that expected a failure fails loudly with `"no error was thrown"`.
//!
//! # Examples
//!
//! ```
//! use helpful_errors::testing::get_error;
//! use helpful_errors::HelpfulError;
//!
//! fn do_something() -> Result<(), HelpfulError> {
//!     Err(HelpfulError::new("found me"))
//! }
//!
//! let error = get_error(do_something).unwrap();
//! assert!(error.to_string().contains("found me"));
//! ```

use crate::types::NoErrorThrownError;

#[cfg(feature = "async")]
mod capture_future;

#[cfg(feature = "async")]
pub use capture_future::CaptureFuture;

/// Message of the sentinel returned when nothing failed.
pub const NO_ERROR_THROWN: &str = "no error was thrown";

/// Builds the sentinel error.
#[inline]
pub fn no_error_thrown() -> NoErrorThrownError {
    NoErrorThrownError::new(NO_ERROR_THROWN)
}

/// Runs `logic` once and returns the error it produced.
///
/// # Errors
///
/// Returns the [`NoErrorThrownError`] sentinel when `logic` succeeded.
///
/// # Examples
///
/// ```
/// use helpful_errors::testing::{get_error, NO_ERROR_THROWN};
///
/// let sentinel = get_error(|| Ok::<_, std::io::Error>(5)).unwrap_err();
/// assert_eq!(sentinel.to_string(), NO_ERROR_THROWN);
/// ```
pub fn get_error<F, T, E>(logic: F) -> Result<E, NoErrorThrownError>
where
    F: FnOnce() -> Result<T, E>,
{
    match logic() {
        Ok(_) => Err(no_error_thrown()),
        Err(error) => Ok(error),
    }
}

/// Awaits `future` and resolves to the error it produced.
///
/// Accepts anything implementing [`IntoFuture`](core::future::IntoFuture),
/// so both a future and the result of calling an async function work.
///
/// # Examples
///
/// ```
/// use helpful_errors::testing::get_error_async;
/// use helpful_errors::HelpfulError;
///
/// async fn do_something() -> Result<(), HelpfulError> {
///     Err(HelpfulError::new("found me"))
/// }
///
/// # async fn demo() {
/// let error = get_error_async(do_something()).await.unwrap();
/// assert!(error.to_string().contains("found me"));
/// # }
/// ```
#[cfg(feature = "async")]
pub fn get_error_async<F, T, E>(future: F) -> CaptureFuture<F::IntoFuture>
where
    F: core::future::IntoFuture<Output = Result<T, E>>,
{
    CaptureFuture::new(future.into_future())
}
