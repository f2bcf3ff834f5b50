//! This file is the root of the `numpipe` Rust crate.
//!
//! numpipe is a small numeric transform-pipeline engine: a registry of named,
//! pure `f64 -> f64` transforms, a builder that composes them into named,
//! reusable pipelines, and reporting that captures how a run changed the data.
//!
//! ```
//! use numpipe::{number_stream, Engine};
//!
//! let mut engine = Engine::new();
//! engine.build_pipeline("smooth", &["center", "square", "clip_0_2"]).unwrap();
//! assert_eq!(engine.run("smooth", &[0.0, 1.0]).unwrap(), vec![0.25, 0.25]);
//!
//! let data: Vec<f64> = number_stream(10).collect();
//! let ctx = engine.run_with_context("smooth", &data).unwrap();
//! assert_eq!(ctx.input_count, 10);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stream;
pub mod transforms;


//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{EngineConfig, PipelineSpec};
pub use engine::Engine;
pub use error::{NumpipeError, Result};
pub use observability::enable_verbose_logging;
pub use pipeline::{build_pipeline, Pipeline, PipelineRegistry};
pub use report::{
    elementwise_difference, run_with_context, summarize, PipelineRunContext, Summary,
    SPAN_EPSILON,
};
pub use stream::{number_stream, NumberStream};
pub use transforms::{transform_fn, TransformFn, TransformRegistry};
