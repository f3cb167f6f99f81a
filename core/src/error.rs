//! Error types for colornet-rs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for colornet-rs operations.
pub type Result<T> = std::result::Result<T, ColornetError>;

/// Errors that can occur while colorizing an image.
///
/// The native engine reports failure as a single null signal at each boundary
/// call (finer diagnostics go to its stderr); these variants classify where in
/// the pipeline that signal, or a local precondition failure, occurred.
#[derive(Debug, Error)]
pub enum ColornetError {
    /// Model loading failed.
    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    /// Inference failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The input image is empty. Detected locally, before any boundary call.
    #[error("Input image is empty")]
    EmptyInput,

    /// Unsupported output format token.
    #[error("Unsupported output format: {0} (expected jpg or png)")]
    Format(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

impl ColornetError {
    /// Create a model load error.
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
