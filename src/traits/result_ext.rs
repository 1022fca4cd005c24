//! Extension trait for rewrapping errors of `Result` types.
//!
//! This module provides [`ResultExt`], which replaces the error of a `Result`
//! with a [`HelpfulError`] carrying the original as cause, without verbose
//! `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use helpful_errors::traits::ResultExt;
//! use helpful_errors::{HelpfulError, WrapOptions};
//!
//! fn load_config() -> Result<String, HelpfulError> {
//!     std::fs::read_to_string("config.toml")
//!         .helpful(WrapOptions::new("could not load configuration"))
//! }
//!
//! assert!(load_config().is_err());
//! ```

use std::error::Error;

use crate::types::{HelpfulError, Variant};
use crate::wrap::WrapOptions;

/// Extension trait for rewrapping the error of a `Result`.
///
/// # Examples
///
/// ## Lazy Options
///
/// ```
/// use helpful_errors::traits::ResultExt;
/// use helpful_errors::{metadata, BadRequest, HelpfulResult, WrapOptions};
///
/// fn parse_age(raw: &str) -> HelpfulResult<u8, BadRequest> {
///     raw.parse::<u8>().helpful_with(|| {
///         WrapOptions::new("age must be a small number")
///             .with_metadata(metadata! { "raw": raw })
///             .variant::<BadRequest>()
///     })
/// }
///
/// assert_eq!(parse_age("42").unwrap(), 42);
/// assert!(parse_age("old").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Replaces the error with a [`HelpfulError`] built from `options`.
    fn helpful<V: Variant>(self, options: WrapOptions<V>) -> Result<T, HelpfulError<V>>;

    /// Replaces the error with a [`HelpfulError`] built from lazily created options.
    ///
    /// The closure is only called if the `Result` is an `Err`.
    fn helpful_with<V, F>(self, f: F) -> Result<T, HelpfulError<V>>
    where
        V: Variant,
        F: FnOnce() -> WrapOptions<V>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn helpful<V: Variant>(self, options: WrapOptions<V>) -> Result<T, HelpfulError<V>> {
        self.map_err(|e| options.into_error(e))
    }

    #[inline]
    fn helpful_with<V, F>(self, f: F) -> Result<T, HelpfulError<V>>
    where
        V: Variant,
        F: FnOnce() -> WrapOptions<V>,
    {
        self.map_err(|e| f().into_error(e))
    }
}

/// Extension trait for turning a missing value into a [`HelpfulError`].
///
/// # Examples
///
/// ```
/// use helpful_errors::traits::OptionExt;
/// use helpful_errors::{metadata, UnexpectedCodePath, HelpfulResult};
///
/// fn first_tire(tires: &[u8]) -> HelpfulResult<u8, UnexpectedCodePath> {
///     tires.first().copied().ok_or_helpful("no tires on the vehicle", metadata! { "tires": tires })
/// }
///
/// let err = first_tire(&[]).unwrap_err();
/// assert!(err.to_string().starts_with("UnexpectedCodePathError: no tires on the vehicle"));
/// ```
pub trait OptionExt<T> {
    /// Converts `None` into a [`HelpfulError`] of variant `V`.
    fn ok_or_helpful<V, M>(
        self,
        message: M,
        metadata: impl Into<Option<crate::types::Metadata>>,
    ) -> Result<T, HelpfulError<V>>
    where
        V: Variant,
        M: Into<String>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_helpful<V, M>(
        self,
        message: M,
        metadata: impl Into<Option<crate::types::Metadata>>,
    ) -> Result<T, HelpfulError<V>>
    where
        V: Variant,
        M: Into<String>,
    {
        match self {
            Some(value) => Ok(value),
            None => HelpfulError::throw(message, metadata),
        }
    }
}
