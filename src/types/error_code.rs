//! Classification codes attached to errors.
//!
//! An [`ErrorCode`] pairs an optional protocol status (e.g. an HTTP status)
//! with an optional machine-readable slug. Variants declare a default code and
//! instances may override it through [`CodeOverride`].

use serde::{Deserialize, Serialize};

/// Programmatic classification of an error.
///
/// # Examples
///
/// ```
/// use helpful_errors::ErrorCode;
///
/// let code = ErrorCode::http(404).with_slug("USER_NOT_FOUND");
/// assert_eq!(code.http, Some(404));
/// assert_eq!(code.slug.as_deref(), Some("USER_NOT_FOUND"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ErrorCode {
    /// Creates a code carrying only a protocol status.
    #[inline]
    pub const fn http(status: u16) -> Self {
        Self { http: Some(status), slug: None }
    }

    /// Creates a code carrying only a slug.
    #[inline]
    pub fn slug<S: Into<String>>(slug: S) -> Self {
        Self { http: None, slug: Some(slug.into()) }
    }

    /// Sets (or replaces) the slug.
    #[inline]
    #[must_use]
    pub fn with_slug<S: Into<String>>(mut self, slug: S) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets (or replaces) the protocol status.
    #[inline]
    #[must_use]
    pub const fn with_http(mut self, status: u16) -> Self {
        self.http = Some(status);
        self
    }

    /// Returns `true` when neither field is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.slug.is_none()
    }

    /// Returns `true` when a non-empty slug is present.
    #[inline]
    pub fn has_slug(&self) -> bool {
        self.slug.as_deref().is_some_and(|slug| !slug.is_empty())
    }

    /// Layers `overrides` on top of `self`; set fields of `overrides` win.
    #[must_use]
    pub fn merged_with(self, overrides: &ErrorCode) -> ErrorCode {
        ErrorCode {
            http: overrides.http.or(self.http),
            slug: overrides.slug.clone().or(self.slug),
        }
    }
}

/// Per-instance adjustment of a variant's default code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeOverride {
    /// Merge these fields over the variant default.
    Merge(ErrorCode),
    /// Expose no code at all, whatever the variant default.
    Suppress,
}

impl From<ErrorCode> for CodeOverride {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        Self::Merge(code)
    }
}

/// Computes the code an instance exposes.
///
/// Returns `None` when suppressed, when there is nothing to merge, or when the
/// merge yields no fields.
pub(crate) fn resolve_code(
    default: Option<ErrorCode>,
    instance: Option<&CodeOverride>,
) -> Option<ErrorCode> {
    let merged = match (default, instance) {
        (_, Some(CodeOverride::Suppress)) => return None,
        (None, None) => return None,
        (Some(default), None) => default,
        (None, Some(CodeOverride::Merge(code))) => code.clone(),
        (Some(default), Some(CodeOverride::Merge(code))) => default.merged_with(code),
    };

    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}
