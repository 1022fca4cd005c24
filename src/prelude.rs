//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use helpful_errors::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`metadata!`], [`variant!`]
//! - **Types**: [`HelpfulError`], [`BadRequestError`], [`UnexpectedCodePathError`],
//!   [`Metadata`], [`ErrorCode`], [`Redact`], [`WrapOptions`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`Variant`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use helpful_errors::prelude::*;
//!
//! fn load_config() -> HelpfulResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .helpful(WrapOptions::new("could not load configuration"))
//! }
//! ```
//!
//! ## Failing in Expression Position
//!
//! ```
//! use helpful_errors::prelude::*;
//!
//! fn port(raw: Option<u16>) -> HelpfulResult<u16, BadRequest> {
//!     raw.ok_or_helpful("a port is required", metadata! { "field": "port" })
//! }
//! ```

// Macros
pub use crate::{metadata, variant};

// Core types
pub use crate::types::{
    BadRequest, BadRequestError, ErrorCode, Helpful, HelpfulError, HelpfulResult, Metadata,
    Redact, UnexpectedCodePath, UnexpectedCodePathError, Variant,
};
pub use crate::wrap::{with_helpful_error, WrapOptions};

// Traits
pub use crate::traits::{OptionExt, ResultExt};
