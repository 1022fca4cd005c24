//! Error types and utilities.
//!
//! This module provides the enriched error type and the values it carries.
//!
//! # Examples
//!
//! ```
//! use helpful_errors::{metadata, BadRequestError, ErrorCode};
//!
//! let err = BadRequestError::with_metadata("no tires on the vehicle", metadata! { "tires": [] });
//!
//! assert!(err.to_string().starts_with("BadRequestError: no tires on the vehicle"));
//! assert_eq!(err.code(), Some(ErrorCode::http(400)));
//! ```
use smallvec::SmallVec;

pub mod cause;
pub mod error_code;
pub mod helpful_error;
pub mod metadata;
pub mod variant;

pub use cause::*;
pub use error_code::*;
pub use helpful_error::*;
pub use metadata::*;
pub use variant::*;

/// SmallVec-backed collection used for walking error chains.
///
/// Uses inline storage for up to 2 elements, the common case of an error and
/// the failure it wraps.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Client-input validation failure, fixed to HTTP 400.
pub type BadRequestError = HelpfulError<BadRequest>;

/// Invariant violation, fixed to HTTP 500.
pub type UnexpectedCodePathError = HelpfulError<UnexpectedCodePath>;

/// Sentinel returned by the capture utilities when nothing failed.
pub type NoErrorThrownError = HelpfulError<NoErrorThrown>;

/// Result alias that fails with a [`HelpfulError`] of variant `V`.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `V` - The error variant, [`Helpful`] by default
pub type HelpfulResult<T, V = Helpful> = Result<T, HelpfulError<V>>;
