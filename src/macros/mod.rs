//! Ergonomic macros for building metadata and declaring variants.
//!
//! - [`macro@crate::metadata`] - Builds [`Metadata`](crate::Metadata) with the
//!   object syntax of `serde_json::json!`.
//! - [`macro@crate::variant`] - Declares a marker type implementing
//!   [`Variant`](crate::Variant) with a name and default code.
//!
//! # Examples
//!
//! ```
//! use helpful_errors::{metadata, variant, ErrorCode, HelpfulError};
//!
//! variant!(
//!     /// Caller is not allowed to do this.
//!     pub Forbidden => "ForbiddenError", http = 403
//! );
//!
//! let err = HelpfulError::<Forbidden>::with_metadata(
//!     "cannot delete invoice",
//!     metadata! { "invoice": 17, "role": "viewer" },
//! );
//!
//! assert!(err.to_string().starts_with("ForbiddenError: cannot delete invoice"));
//! assert_eq!(err.code(), Some(ErrorCode::http(403)));
//! ```

/// Builds [`Metadata`](crate::Metadata) from JSON object syntax.
///
/// Accepts exactly what `serde_json::json!({ ... })` accepts between the
/// braces: literal keys, nested arrays and objects, and arbitrary expressions
/// as values.
///
/// # Examples
///
/// ```
/// use helpful_errors::metadata;
///
/// let user_id = 123;
/// let meta = metadata! {
///     "user_id": user_id,
///     "tires": [],
///     "owner": { "name": "casey" },
/// };
///
/// assert_eq!(meta.len(), 3);
/// assert_eq!(meta.get("user_id"), Some(&serde_json::json!(123)));
///
/// let empty = metadata! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($tt:tt)+) => {
        $crate::__private::metadata_from_object($crate::__private::serde_json::json!({ $($tt)+ }))
    };
}

/// Declares a marker type implementing [`Variant`](crate::Variant).
///
/// # Syntax
///
/// - `variant!(pub Name => "NamePrefix")` - prefix only, no default code
/// - `variant!(pub Name => "NamePrefix", http = 404, slug = "NOT_FOUND")` -
///   with a default code (either field may be omitted)
/// - `variant!(pub Name => "NamePrefix", extends = Parent)` - inherits the
///   default code of another variant
///
/// # Examples
///
/// ```
/// use helpful_errors::{variant, BadRequest, ErrorCode, HelpfulError};
///
/// variant!(pub InvalidEmail => "InvalidEmailError", extends = BadRequest);
///
/// let err = HelpfulError::<InvalidEmail>::new("missing @");
/// assert_eq!(err.to_string(), "InvalidEmailError: missing @");
/// assert_eq!(err.code(), Some(ErrorCode::http(400)));
/// ```
#[macro_export]
macro_rules! variant {
    (
        $(#[$attr:meta])*
        $vis:vis $marker:ident => $name:literal, extends = $parent:ty $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $marker;

        impl $crate::Variant for $marker {
            const NAME: ::core::option::Option<&'static str> = ::core::option::Option::Some($name);

            #[inline]
            fn default_code() -> ::core::option::Option<$crate::ErrorCode> {
                <$parent as $crate::Variant>::default_code()
            }
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis $marker:ident => $name:literal
        $(, http = $http:expr)?
        $(, slug = $slug:expr)?
        $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $marker;

        impl $crate::Variant for $marker {
            const NAME: ::core::option::Option<&'static str> = ::core::option::Option::Some($name);

            #[inline]
            fn default_code() -> ::core::option::Option<$crate::ErrorCode> {
                let code = $crate::ErrorCode::default()
                    $(.with_http($http))?
                    $(.with_slug($slug))?;
                if code.is_empty() {
                    ::core::option::Option::None
                } else {
                    ::core::option::Option::Some(code)
                }
            }
        }
    };
}
