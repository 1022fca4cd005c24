//! Process-wide options consulted when an error is constructed.
//!
//! Options come from the environment and are re-read on every construction,
//! so changing a variable takes effect for the next error without a restart.
//!
//! # Configuration Priority (highest wins)
//!
//! 1. Thread-local override installed with [`override_env_options`]
//! 2. Environment variables
//! 3. Library defaults
//!
//! # Examples
//!
//! ```
//! use helpful_errors::config::{override_env_options, EnvOptions};
//! use helpful_errors::{metadata, HelpfulError};
//!
//! let _guard = override_env_options(EnvOptions::new().expand(false));
//! let err: HelpfulError = HelpfulError::with_metadata("lookup failed", metadata! { "id": 7 });
//! assert_eq!(err.to_string(), "lookup failed\n\n{\"id\":7}");
//! ```

use std::cell::Cell;

/// Environment variable controlling metadata expansion.
///
/// Any value other than `false` (including an unset variable) expands.
pub const EXPAND_ENV_VAR: &str = "ERROR_EXPAND";

/// Library defaults.
pub mod defaults {
    /// Pretty-print metadata in error messages.
    pub const EXPAND: bool = true;
}

thread_local! {
    static OVERRIDE: Cell<Option<EnvOptions>> = const { Cell::new(None) };
}

/// Options that shape how an error message is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOptions {
    /// Pretty-print (indent) the metadata block of the message.
    pub expand: bool,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self::from_env()
    }
}

impl EnvOptions {
    /// Create options from library defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `ERROR_EXPAND` - `false` renders metadata as compact JSON
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(EXPAND_ENV_VAR).ok().as_deref())
    }

    /// Interprets a raw `ERROR_EXPAND` value; `None` means unset.
    pub fn from_env_value(expand: Option<&str>) -> Self {
        let expand = match expand {
            Some(value) => value != "false",
            None => defaults::EXPAND,
        };
        Self { expand }
    }

    /// Create options with library defaults (no env override).
    pub const fn new() -> Self {
        Self { expand: defaults::EXPAND }
    }

    /// Sets whether metadata is pretty-printed.
    pub const fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}

/// Returns the options in effect for the current thread.
///
/// An installed override wins; otherwise the environment is read afresh.
#[inline]
pub fn env_options() -> EnvOptions {
    OVERRIDE.with(Cell::get).unwrap_or_else(EnvOptions::from_env)
}

/// Installs `options` for the current thread until the guard is dropped.
///
/// Guards nest: dropping one restores whatever was in effect before it.
#[must_use = "the override is removed as soon as the guard is dropped"]
pub fn override_env_options(options: EnvOptions) -> EnvOptionsGuard {
    let previous = OVERRIDE.with(|cell| cell.replace(Some(options)));
    EnvOptionsGuard { previous }
}

/// Restores the previous thread-local options on drop.
#[derive(Debug)]
pub struct EnvOptionsGuard {
    previous: Option<EnvOptions>,
}

impl Drop for EnvOptionsGuard {
    fn drop(&mut self) {
        OVERRIDE.with(|cell| cell.set(self.previous));
    }
}
