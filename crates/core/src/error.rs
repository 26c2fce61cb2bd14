// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for iv-core operations.

use thiserror::Error;

/// All possible errors that can occur in iv-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue json: {0}\n  hint: expected an issue object with `key` and `fields`")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for iv-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
