//! Enriched error type with structured metadata, cause and classification code.
//!
//! This module provides [`HelpfulError`], an error that:
//! - Renders a self-contained message (message plus a JSON block of metadata)
//! - Keeps the wrapped [`Cause`] reachable through [`std::error::Error::source`]
//! - Exposes an [`ErrorCode`] merged from its [`Variant`] default and the instance
//! - Can be [redacted](HelpfulError::redact) into a sibling without metadata or cause

use core::marker::PhantomData;
use std::error::Error;

use crate::config::env_options;
use crate::types::error_code::resolve_code;
use crate::types::variant::prefixed;
use crate::types::{Cause, ErrorCode, ErrorVec, Helpful, Metadata, Variant};

mod format;
mod traits;

/// Error carrying structured context, an optional cause and an optional code.
///
/// The variant parameter `V` fixes the message prefix and the default code;
/// see [`BadRequestError`](crate::BadRequestError) and
/// [`UnexpectedCodePathError`](crate::UnexpectedCodePathError).
///
/// # Examples
///
/// ```
/// use helpful_errors::config::{override_env_options, EnvOptions};
/// use helpful_errors::{metadata, HelpfulError};
///
/// let _guard = override_env_options(EnvOptions::new().expand(false));
///
/// let err: HelpfulError = HelpfulError::with_metadata("the dogs were let out", metadata! { "who": "your mom" });
/// assert_eq!(err.to_string(), "the dogs were let out\n\n{\"who\":\"your mom\"}");
/// assert!(err.code().is_none());
/// ```
#[must_use]
pub struct HelpfulError<V: Variant = Helpful> {
    message: String,
    metadata: Option<Metadata>,
    original: Original,
    variant: PhantomData<fn() -> V>,
}

/// Construction inputs, kept for reconstruction only.
#[derive(Clone)]
struct Original {
    message: String,
    metadata: Option<Metadata>,
}

/// Axis stripped by [`HelpfulError::redact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redact {
    /// Every metadata field except the cause.
    Metadata,
    /// The wrapped cause.
    Cause,
}

impl Redact {
    /// Both axes.
    pub const ALL: [Redact; 2] = [Redact::Metadata, Redact::Cause];
}

impl<V: Variant> HelpfulError<V> {
    /// Creates an error without metadata.
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::from_parts(message, None)
    }

    /// Creates an error with metadata.
    #[inline]
    pub fn with_metadata<M: Into<String>>(message: M, metadata: Metadata) -> Self {
        Self::from_parts(message, Some(metadata))
    }

    /// Creates an error from a message and optional metadata.
    ///
    /// The expand option is read once, here; the rendered message never
    /// changes afterwards.
    pub fn from_parts<M: Into<String>>(message: M, metadata: Option<Metadata>) -> Self {
        let message = message.into();
        let rendered = format::render(
            &prefixed::<V>(&message),
            metadata.as_ref(),
            env_options().expand,
        );

        Self {
            message: rendered,
            metadata: metadata.as_ref().map(Metadata::without_code_slot),
            original: Original { message, metadata },
            variant: PhantomData,
        }
    }

    /// Returns an `Err` holding a new error of this variant.
    ///
    /// Lets a failure stand in expression position.
    ///
    /// # Examples
    ///
    /// ```
    /// use helpful_errors::BadRequestError;
    ///
    /// fn phone(input: Option<&str>) -> Result<&str, BadRequestError> {
    ///     let phone = input.map_or_else(|| BadRequestError::throw("expected a phone", None), Ok)?;
    ///     Ok(phone)
    /// }
    ///
    /// let err = phone(None).unwrap_err();
    /// assert!(err.to_string().starts_with("BadRequestError: expected a phone"));
    /// ```
    #[inline]
    pub fn throw<T, M>(message: M, metadata: impl Into<Option<Metadata>>) -> Result<T, Self>
    where
        M: Into<String>,
    {
        Err(Self::from_parts(message, metadata.into()))
    }

    /// The rendered message, identical to the `Display` output.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message as supplied, without variant prefix or metadata block.
    #[inline]
    pub fn original_message(&self) -> &str {
        &self.original.message
    }

    /// The metadata supplied at construction, with the code slot cleared.
    ///
    /// The cause stays reachable; the code is only available via [`code`](Self::code).
    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// The error this one wraps, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.original.metadata.as_ref().and_then(Metadata::cause)
    }

    /// The classification code, merged on every call from the variant default
    /// and the instance override.
    pub fn code(&self) -> Option<ErrorCode> {
        let instance = self.original.metadata.as_ref().and_then(Metadata::code);
        resolve_code(V::default_code(), instance)
    }

    /// The variant name used as message prefix.
    #[inline]
    pub fn variant_name(&self) -> Option<&'static str> {
        V::NAME
    }

    /// Builds a sibling error with the selected axes stripped.
    ///
    /// | stripped            | new metadata                         |
    /// |---------------------|--------------------------------------|
    /// | metadata and cause  | none                                 |
    /// | nothing             | the original metadata, unchanged     |
    /// | metadata            | only the original cause              |
    /// | cause               | the original metadata minus the cause|
    ///
    /// The sibling is rebuilt as the same variant, so prefix and default code
    /// apply again, and its message is rendered with the current options.
    ///
    /// # Examples
    ///
    /// ```
    /// use helpful_errors::{metadata, HelpfulError, Redact};
    ///
    /// let err: HelpfulError = HelpfulError::with_metadata("login failed", metadata! { "password": "hunter2" });
    /// let safe = err.redact(Redact::ALL);
    /// assert_eq!(safe.to_string(), "login failed");
    /// assert!(err.to_string().contains("hunter2"));
    /// ```
    pub fn redact<I>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = Redact>,
    {
        let (mut strip_metadata, mut strip_cause) = (false, false);
        for part in parts {
            match part {
                Redact::Metadata => strip_metadata = true,
                Redact::Cause => strip_cause = true,
            }
        }

        let original = self.original.metadata.as_ref();
        let metadata = match (strip_metadata, strip_cause) {
            (true, true) => None,
            (false, false) => original.cloned(),
            (true, false) => original.and_then(Metadata::cause_only),
            (false, true) => original.map(Metadata::without_cause_slot),
        };

        Self::from_parts(self.original.message.clone(), metadata)
    }

    /// This error followed by every error reachable through `source()`.
    pub fn chain(&self) -> ErrorVec<&(dyn Error + 'static)> {
        let mut chain = ErrorVec::new();
        let mut current: Option<&(dyn Error + 'static)> = Some(self);
        while let Some(error) = current {
            chain.push(error);
            current = error.source();
        }
        chain
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current: &(dyn Error + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}
