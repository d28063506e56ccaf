//! # liftoff-core - Core Domain Types
//!
//! Foundation crate for Liftoff. Provides the launch domain types, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`launch`)
//! - [`LaunchRecord`] - A single launch as served by the listing endpoint
//! - [`LaunchLinks`] - Optional media/article links attached to a launch
//! - [`LaunchStatus`] - Derived outcome (Success, Upcoming, Failed)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use liftoff_core::prelude::*;
//! ```

pub mod error;
pub mod launch;
pub mod logging;

/// Prelude for common imports used throughout all Liftoff crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use launch::{LaunchLinks, LaunchRecord, LaunchStatus};
