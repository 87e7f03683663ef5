//! Error types for Easel operations.
//!
//! This module provides the main error type [`EaselError`] which wraps the
//! error conditions that can occur while loading and rendering scenes.

use std::io;

use thiserror::Error;

use easel_core::DrawingError;

/// The main error type for Easel operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant keeps the scene source next to the TOML error so the
/// offending span can be shown when reporting.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid scene: {}", .err.message())]
    Scene { err: toml::de::Error, src: String },

    #[error("Reference to unknown shared element `{0}`")]
    UnknownReference(String),

    #[error("Drawing error: {0}")]
    Drawing(#[from] DrawingError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EaselError {
    /// Create a new `Scene` error with the associated source text.
    pub fn new_scene_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Scene {
            err,
            src: src.into(),
        }
    }
}
