//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus async-specific items.
//!
//! # Usage
//!
//! ```ignore
//! use helpful_errors::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> HelpfulResult<User> {
//!     fetch_from_db(id)
//!         .helpful(WrapOptions::new("could not fetch user").with_metadata(metadata! { "id": id }))
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`metadata!`], [`variant!`]
//! - **Types**: [`HelpfulError`], [`WrapOptions`], [`Metadata`], ...
//! - **Traits**: [`ResultExt`], [`OptionExt`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureResultExt`](crate::async_ext::FutureResultExt) - `.helpful()` and `.helpful_with()` for futures
//! - **Types**: [`WrapFuture`](crate::async_ext::WrapFuture)
//! - **Functions**: [`with_helpful_error_async`](crate::with_helpful_error_async)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureResultExt, WrapFuture};
pub use crate::wrap::with_helpful_error_async;
