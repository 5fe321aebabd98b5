//! Core error types for tabstrip-core
//!
//! This module provides the error type shared by the tab control engine
//! and its configuration layer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving a tab control.
///
/// Range and type-contract errors indicate caller misuse and are surfaced
/// as-is; the engine never retries or recovers from them internally.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An index was outside the valid range of tab pages.
    ///
    /// Raised when selecting, removing, inserting or resizing a page
    /// button with an index the control does not hold.
    #[error("index {index} is out of range for {count} tab pages")]
    IndexOutOfRange { index: usize, count: usize },

    /// A child control that is not a tab page was offered to the control.
    ///
    /// The child collection only accepts [`crate::TabPage`] values; the
    /// control is left untouched when this is returned.
    #[error("control `{kind}` is not a tab page")]
    NotATabPage { kind: String },

    /// Configuration values that cannot produce a usable control.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration or theme TOML could not be parsed.
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be serialized back to TOML.
    #[error("toml serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A configuration file existed but could not be read.
    #[error("failed to read config at {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Underlying IO error bubbled up from filesystem operations.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// Shorthand for [`CoreError::IndexOutOfRange`].
    pub fn out_of_range(index: usize, count: usize) -> Self {
        CoreError::IndexOutOfRange { index, count }
    }
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
