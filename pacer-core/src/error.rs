// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the pacer workspace.
//!
//! The debounce and throttle wrappers themselves never fail: a trigger is
//! either scheduled, coalesced or dropped. Errors only arise while wiring a
//! wrapper to its scheduler, for example when no async runtime is running.
//!
//! # Examples
//!
//! ```
//! use pacer_core::{PacerError, Result};
//!
//! fn scheduler_for_test() -> Result<()> {
//!     Err(PacerError::runtime_unavailable("no reactor running"))
//! }
//! ```

/// Root error type for scheduler setup and driving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacerError {
    /// No async runtime was available to host deferred invocations.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Description of the missing runtime
        context: String,
    },
}

impl PacerError {
    /// Create a runtime-unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }
}

/// Specialized Result type for pacer operations.
///
/// ```
/// use pacer_core::Result;
///
/// fn setup() -> Result<u32> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PacerError>;
