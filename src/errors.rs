// ABOUTME: Error types for the scoring engine with structured context
// ABOUTME: Defines EngineError and the EngineResult alias used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Error handling for the scoring engine.
//!
//! The calculators themselves never fail: absent or malformed input degrades
//! to a neutral score contribution instead of an error. The only conditions
//! that surface as `EngineError` are a failed Data Store read (a storage or
//! network fault that is the store's concern, propagated untouched) and an
//! invalid scoring configuration.

use std::error::Error;

/// Common error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A Data Store read failed (storage/network fault)
    #[error("data store read failed: {message}")]
    Store {
        /// Description of the failed read
        message: String,
        /// Underlying store error, when available
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// A scoring configuration value is invalid
    #[error("invalid configuration for '{key}': {reason}")]
    InvalidConfig {
        /// Configuration key that failed validation
        key: &'static str,
        /// Reason why the value is invalid
        reason: String,
    },
}

impl EngineError {
    /// Create a store error without an underlying source
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error wrapping an underlying source error
    #[must_use]
    pub fn store_with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn invalid_config(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
