//! Structured context carried by an enriched error.
//!
//! [`Metadata`] is an ordered JSON object of free-form fields plus two
//! reserved, typed slots: the [`Cause`] being wrapped and an optional
//! [`CodeOverride`]. The free-form fields are what ends up in the rendered
//! message; the reserved slots never do.
//!
//! A `"code"` field is never stored as a field. Whichever way it arrives
//! (builder, macro, map or typed shape) it is read into the code slot: an
//! object merges over the variant default, `null` or `false` suppresses it.
//!
//! # Examples
//!
//! ```
//! use helpful_errors::{metadata, ErrorCode, Metadata};
//!
//! let meta = Metadata::new()
//!     .with("user_id", 42)
//!     .with("operation", "fetch")
//!     .with_code(ErrorCode::slug("USER_FETCH"));
//!
//! assert_eq!(meta.get("user_id"), Some(&serde_json::json!(42)));
//! assert_eq!(meta.len(), 2);
//!
//! let same = metadata! { "user_id": 42, "operation": "fetch" };
//! assert_eq!(same.fields(), meta.fields());
//! ```

use std::error::Error;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{Cause, CodeOverride, ErrorCode};

/// Field consumed into the code slot.
pub(crate) const CODE_KEY: &str = "code";

/// Field name reserved for the cause; a plain field under it is kept but
/// never rendered.
pub(crate) const CAUSE_KEY: &str = "cause";

/// Structured context for an enriched error.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    fields: Map<String, Value>,
    cause: Option<Cause>,
    code: Option<CodeOverride>,
}

impl Metadata {
    /// Creates empty metadata.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds metadata from any value that serializes to a JSON object.
    ///
    /// This is the entry point for typed metadata shapes: declare a
    /// `#[derive(Serialize)]` struct and pass it here.
    ///
    /// # Errors
    ///
    /// Fails when `shape` cannot be serialized, does not serialize to an
    /// object, or has a `code` field that is not an object, `null` or `false`.
    pub fn from_serialize<S>(shape: &S) -> Result<Self, serde_json::Error>
    where
        S: Serialize + ?Sized,
    {
        let fields = match serde_json::to_value(shape)? {
            Value::Object(fields) => fields,
            other => {
                return Err(invalid(format!(
                    "metadata must serialize to a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut metadata = Self::new();
        for (key, value) in fields {
            if key == CODE_KEY {
                metadata.code = Some(code_from_value(value)?);
            } else {
                metadata.fields.insert(key, value);
            }
        }
        Ok(metadata)
    }

    /// Adds (or replaces) a field.
    #[inline]
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts a field, returning the previous value under that key.
    ///
    /// A `"code"` key sets the code slot instead and returns `None`; a value
    /// that is not an object, `null` or `false` is dropped.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();
        if key == CODE_KEY {
            if let Ok(code) = code_from_value(value) {
                self.code = Some(code);
            }
            return None;
        }
        self.fields.insert(key, value)
    }

    /// Records `error` as the cause.
    #[inline]
    #[must_use]
    pub fn with_cause<E>(self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_cause(Cause::new(error))
    }

    /// Records an existing [`Cause`] handle, keeping its identity.
    #[inline]
    #[must_use]
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Overrides the variant's default code field-by-field.
    #[inline]
    #[must_use]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(CodeOverride::Merge(code));
        self
    }

    /// Suppresses any code, including the variant default.
    #[inline]
    #[must_use]
    pub fn without_code(mut self) -> Self {
        self.code = Some(CodeOverride::Suppress);
        self
    }

    /// Returns the free-form fields in insertion order.
    #[inline]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Looks up a single field.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The wrapped error, if one was recorded.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The code override, if any. The merged code lives on the error.
    #[inline]
    pub fn code(&self) -> Option<&CodeOverride> {
        self.code.as_ref()
    }

    /// Number of free-form fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when there are no free-form fields.
    ///
    /// A cause or code alone still counts as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields that belong in a rendered message, or `None` if none remain.
    pub(crate) fn displayable_fields(&self) -> Option<Map<String, Value>> {
        let visible: Map<String, Value> = self
            .fields
            .iter()
            .filter(|(key, _)| key.as_str() != CAUSE_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if visible.is_empty() {
            None
        } else {
            Some(visible)
        }
    }

    pub(crate) fn without_code_slot(&self) -> Self {
        Self { fields: self.fields.clone(), cause: self.cause.clone(), code: None }
    }

    pub(crate) fn without_cause_slot(&self) -> Self {
        Self { fields: self.fields.clone(), cause: None, code: self.code.clone() }
    }

    /// Metadata holding nothing but the cause, if there is one.
    pub(crate) fn cause_only(&self) -> Option<Self> {
        self.cause.clone().map(|cause| Self::new().with_shared_cause(cause))
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(fields: Map<String, Value>) -> Self {
        fields.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        metadata.extend(iter);
        metadata
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Reads a `"code"` field: an object merges, `null` or `false` suppresses.
fn code_from_value(value: Value) -> Result<CodeOverride, serde_json::Error> {
    match value {
        Value::Null | Value::Bool(false) => Ok(CodeOverride::Suppress),
        Value::Object(code) => {
            serde_json::from_value::<ErrorCode>(Value::Object(code)).map(CodeOverride::Merge)
        }
        other => Err(invalid(format!(
            "metadata `code` must be an object, null or false, got {}",
            json_kind(&other)
        ))),
    }
}

fn invalid(message: String) -> serde_json::Error {
    <serde_json::Error as serde::ser::Error>::custom(message)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
