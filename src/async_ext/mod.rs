//! Async extensions for helpful-errors.
//!
//! This module provides the asynchronous half of the wrap combinator: a
//! future adapter that rewraps the error a future resolves to, and the
//! extension trait that creates it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! helpful-errors = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use helpful_errors::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> HelpfulResult<User> {
//!     fetch_from_db(id)
//!         .helpful(WrapOptions::new("could not fetch user"))
//!         .await
//! }
//! ```

mod future_ext;
mod wrap_future;

pub use future_ext::FutureResultExt;
pub use wrap_future::WrapFuture;
