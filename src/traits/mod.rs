//! Extension traits for rewrapping failures.
//!
//! - [`ResultExt`]: replaces the error of a `Result` with a [`HelpfulError`]
//! - [`OptionExt`]: turns a `None` into a [`HelpfulError`]
//!
//! The async counterpart lives in [`async_ext`](crate::async_ext).
//!
//! # Examples
//!
//! ```
//! use helpful_errors::traits::ResultExt;
//! use helpful_errors::WrapOptions;
//!
//! let err = "x".parse::<i32>()
//!     .helpful(WrapOptions::new("expected a number"))
//!     .unwrap_err();
//! assert!(err.cause().is_some());
//! ```
//!
//! [`HelpfulError`]: crate::HelpfulError

pub mod result_ext;

pub use result_ext::{OptionExt, ResultExt};
