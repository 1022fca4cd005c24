//! Named kinds of enriched errors.
//!
//! A variant is a zero-sized marker type that fixes a message prefix and a
//! default [`ErrorCode`]. [`HelpfulError`] is generic over its variant, so
//! every construction path (`new`, `throw`, `wrap`, `redact`) rebuilds with
//! the right prefix and code without any runtime lookup.
//!
//! New variants are declared with the [`variant!`](crate::variant) macro or by
//! implementing [`Variant`] by hand.
//!
//! [`HelpfulError`]: crate::HelpfulError

use crate::types::ErrorCode;

/// Descriptor of an error kind.
///
/// # Examples
///
/// ```
/// use helpful_errors::{ErrorCode, HelpfulError, Variant};
///
/// struct RateLimited;
///
/// impl Variant for RateLimited {
///     const NAME: Option<&'static str> = Some("RateLimitedError");
///
///     fn default_code() -> Option<ErrorCode> {
///         Some(ErrorCode::http(429))
///     }
/// }
///
/// let err = HelpfulError::<RateLimited>::new("slow down");
/// assert_eq!(err.to_string(), "RateLimitedError: slow down");
/// assert_eq!(err.code(), Some(ErrorCode::http(429)));
/// ```
pub trait Variant: Send + Sync + 'static {
    /// Prepended to every message as `"{NAME}: "`; `None` leaves messages as-is.
    const NAME: Option<&'static str>;

    /// Code exposed by every instance unless overridden or suppressed.
    #[inline]
    fn default_code() -> Option<ErrorCode> {
        None
    }
}

/// The base variant: no prefix, no default code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Helpful;

impl Variant for Helpful {
    const NAME: Option<&'static str> = None;
}

/// Malformed or missing caller-supplied data (HTTP 400).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BadRequest;

impl Variant for BadRequest {
    const NAME: Option<&'static str> = Some("BadRequestError");

    #[inline]
    fn default_code() -> Option<ErrorCode> {
        Some(ErrorCode::http(400))
    }
}

/// A code path that should never have been reached (HTTP 500).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnexpectedCodePath;

impl Variant for UnexpectedCodePath {
    const NAME: Option<&'static str> = Some("UnexpectedCodePathError");

    #[inline]
    fn default_code() -> Option<ErrorCode> {
        Some(ErrorCode::http(500))
    }
}

/// Sentinel produced by [`get_error`](crate::testing::get_error) when the
/// logic under test did not fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoErrorThrown;

impl Variant for NoErrorThrown {
    const NAME: Option<&'static str> = None;
}

/// Prefixes `message` with the variant name, if any.
pub(crate) fn prefixed<V: Variant>(message: &str) -> String {
    match V::NAME {
        Some(name) => format!("{name}: {message}"),
        None => message.to_owned(),
    }
}
