//! Enriched errors that explain themselves.
//!
//! A [`HelpfulError`] carries structured [`Metadata`], an optional [`Cause`]
//! and an optional [`ErrorCode`], and renders a message that is readable
//! without further tooling: the message, a blank line, and the metadata as
//! JSON. Variants such as [`BadRequestError`] fix a message prefix and a
//! default code.
//!
//! # Examples
//!
//! ## Basic Error with Metadata
//!
//! ```
//! use helpful_errors::{metadata, HelpfulError};
//!
//! let err: HelpfulError = HelpfulError::with_metadata("database connection failed", metadata! { "retry_count": 3 });
//!
//! assert!(err.to_string().starts_with("database connection failed\n\n"));
//! assert!(err.to_string().contains("retry_count"));
//! ```
//!
//! ## Classification Codes
//!
//! ```
//! use helpful_errors::{BadRequestError, ErrorCode, Metadata};
//!
//! let err = BadRequestError::with_metadata(
//!     "email is required",
//!     Metadata::new().with("field", "email").with_code(ErrorCode::slug("EMAIL_REQUIRED")),
//! );
//!
//! assert_eq!(err.code(), Some(ErrorCode::http(400).with_slug("EMAIL_REQUIRED")));
//! ```
//!
//! ## Wrapping Logic
//!
//! ```
//! use helpful_errors::{metadata, with_helpful_error, WrapOptions};
//!
//! let read = with_helpful_error(
//!     |path: &str| std::fs::read_to_string(path),
//!     WrapOptions::new("could not read settings").with_metadata(metadata! { "scope": "user" }),
//! );
//!
//! let err = read("/definitely/not/here").unwrap_err();
//! assert!(err.cause().unwrap().is::<std::io::Error>());
//! ```
//!
//! ## Redaction
//!
//! ```
//! use helpful_errors::{metadata, HelpfulError, Redact};
//!
//! let err: HelpfulError = HelpfulError::with_metadata("login failed", metadata! { "password": "hunter2" });
//! assert_eq!(err.redact([Redact::Metadata]).to_string(), "login failed");
//! ```

/// Process-wide options read at construction
pub mod config;
/// Metadata and variant declaration macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capturing errors for assertions
pub mod testing;
/// Extension traits for rewrapping failures
pub mod traits;
/// HelpfulError and the values it carries
pub mod types;
/// The wrap combinator
pub mod wrap;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use traits::*;
pub use types::{
    BadRequest, BadRequestError, Cause, CodeOverride, ErrorCode, ErrorVec, Helpful, HelpfulError,
    HelpfulResult, Metadata, NoErrorThrown, NoErrorThrownError, Redact, UnexpectedCodePath,
    UnexpectedCodePathError, Variant,
};
pub use wrap::{with_helpful_error, WrapOptions};

#[cfg(feature = "async")]
pub use wrap::with_helpful_error_async;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;

    use crate::Metadata;

    /// Backs the `metadata!` macro; `json!({ .. })` always yields an object.
    pub fn metadata_from_object(value: serde_json::Value) -> Metadata {
        match value {
            serde_json::Value::Object(fields) => Metadata::from(fields),
            _ => Metadata::new(),
        }
    }
}
