// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for formfactor
//!
//! Classification itself never fails; these errors surface from signal
//! providers (battery reads), label parsing, report serialization and
//! logging setup.

use thiserror::Error;

/// Main error type for formfactor operations
#[derive(Error, Debug)]
pub enum FormFactorError {
    /// The platform exposes no battery status API
    #[error("Battery status unsupported on this platform")]
    BatteryUnsupported,

    /// The battery status API exists but the read failed
    #[error("Battery status unavailable: {0}")]
    BatteryUnavailable(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Tracing subscriber setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormFactorError {
    /// Whether this error means the battery API is missing rather than broken
    pub fn is_unsupported(&self) -> bool {
        matches!(self, FormFactorError::BatteryUnsupported)
    }
}

/// Result type alias for formfactor operations
pub type Result<T> = std::result::Result<T, FormFactorError>;
