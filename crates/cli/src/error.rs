// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ivrs library.
///
/// Rendering itself only fails on a sink write; the other variants come
/// from reading input and configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no issue on input\n  hint: pass a file path or pipe issue JSON on stdin")]
    EmptyInput,

    #[error("{0}")]
    Core(#[from] iv_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias using the ivrs Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
