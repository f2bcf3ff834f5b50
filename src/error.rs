// In: src/error.rs

//! This module defines the single, unified error type for the entire numpipe library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumpipeError>;

#[derive(Error, Debug)]
pub enum NumpipeError {
    // =========================================================================
    // === Registry & Builder Errors
    // =========================================================================
    /// A pipeline with this name has already been registered.
    #[error("Pipeline '{0}' already exists")]
    DuplicatePipeline(String),

    /// One or more step names are not present in the transform registry.
    /// Carries every missing name, in the order it was given.
    #[error("Unknown transforms: {0:?}")]
    UnknownTransforms(Vec<String>),

    /// No pipeline is registered under the requested name.
    #[error("No pipeline named '{0}'")]
    UnknownPipeline(String),

    /// A single transform lookup failed.
    #[error("Transform '{0}' is not registered")]
    TransformNotFound(String),

    // =========================================================================
    // === Configuration Errors
    // =========================================================================
    #[error("Failed to build pipeline '{pipeline}' from config: {source}")]
    ConfigPipeline {
        pipeline: String,
        #[source]
        source: Box<NumpipeError>,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically while parsing an `EngineConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from the I/O subsystem (config file or log file could not be opened).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
