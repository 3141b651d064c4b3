// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for contract violations in stream pipelines.

use thiserror::Error;

/// Errors raised by streams, sources and operators.
///
/// Streams are infallible during normal emission; these errors only surface
/// when a caller breaks a documented contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A null-like payload was handed to an API that requires a meaningful
    /// value.
    #[error("invalid argument: {context}")]
    InvalidArgument {
        /// What was rejected and by whom.
        context: String,
    },

    /// A side effect attempted to re-enter the stage it is attached to,
    /// which would interleave emissions out of order.
    #[error("side effect is not allowed to recursively emit through its own stage")]
    Reentrancy,

    /// A current-value query reached a stage that cannot answer one.
    #[error("current value is not supported: {context}")]
    Unsupported {
        /// Which query was refused and how to avoid it.
        context: String,
    },
}

impl StreamError {
    /// Creates an [`StreamError::InvalidArgument`] with the given context.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Creates an [`StreamError::Unsupported`] with the given context.
    pub fn unsupported(context: impl Into<String>) -> Self {
        Self::Unsupported {
            context: context.into(),
        }
    }
}

/// Convenience alias for results carrying a [`StreamError`].
pub type Result<T> = std::result::Result<T, StreamError>;
