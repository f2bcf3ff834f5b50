// In: src/engine.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Engine Facade
// ====================================================================================
//
// The `Engine` is the host-facing API of the numpipe library. It owns one
// `TransformRegistry` and one `PipelineRegistry` and forwards to the pure modules
// underneath. Hosts (CLI, HTTP handlers, tests) own their engine; there is no
// process-wide state.
//
// Data Flow:
//
//   1. [register_transform]  -> TransformRegistry (last writer wins)
//
//   2. [build_pipeline]      -> pipeline::builder validates names, resolves them
//         |                     into steps, registers an `Arc<Pipeline>`
//         `-> DuplicatePipeline / UnknownTransforms on failure, nothing registered
//
//   3. [run]                 -> Pipeline::run, same length and order as the input
//
//   4. [run_with_context]    -> report::context, before/after range of one run
//
// Registration needs `&mut Engine`; concurrent hosts either guard the engine with
// a lock or build everything up front and share `&Engine` read-only.
// ====================================================================================

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::NumpipeError;
use crate::pipeline::{self, Pipeline, PipelineRegistry};
use crate::report::{self, PipelineRunContext, Summary};
use crate::transforms::{transform_fn, TransformRegistry};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    transforms: TransformRegistry,
    pipelines: PipelineRegistry,
}

impl Engine {
    /// An engine with the built-in transforms registered and no pipelines.
    pub fn new() -> Self {
        Self {
            transforms: TransformRegistry::with_builtins(),
            pipelines: PipelineRegistry::new(),
        }
    }

    /// An engine with nothing registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an engine and every pipeline in `config`, in order.
    ///
    /// The first pipeline that fails to build aborts with `ConfigPipeline`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, NumpipeError> {
        let mut engine = if config.register_builtins {
            Self::new()
        } else {
            Self::empty()
        };

        for spec in &config.pipelines {
            engine
                .build_pipeline(&spec.name, spec.steps.as_slice())
                .map_err(|source| NumpipeError::ConfigPipeline {
                    pipeline: spec.name.clone(),
                    source: Box::new(source),
                })?;
        }
        Ok(engine)
    }

    /// Registers (or replaces) a named transform.
    pub fn register_transform<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.transforms.register(name, transform_fn(f));
    }

    /// Builds and registers a pipeline from transform names.
    pub fn build_pipeline<S: AsRef<str>>(
        &mut self,
        name: &str,
        step_names: &[S],
    ) -> Result<Arc<Pipeline>, NumpipeError> {
        pipeline::build_pipeline(&self.transforms, &mut self.pipelines, name, step_names)
    }

    pub fn pipeline(&self, name: &str) -> Option<Arc<Pipeline>> {
        self.pipelines.get(name)
    }

    /// Runs the named pipeline over `values`.
    pub fn run(&self, name: &str, values: &[f64]) -> Result<Vec<f64>, NumpipeError> {
        let pipe = self
            .pipelines
            .get(name)
            .ok_or_else(|| NumpipeError::UnknownPipeline(name.to_string()))?;
        Ok(pipe.run(values))
    }

    pub fn run_with_context(
        &self,
        name: &str,
        values: &[f64],
    ) -> Result<PipelineRunContext, NumpipeError> {
        report::run_with_context(&self.pipelines, name, values)
    }

    /// Runs the named pipeline and summarizes its output.
    pub fn summarize_run(&self, name: &str, values: &[f64]) -> Result<Summary, NumpipeError> {
        Ok(report::summarize(&self.run(name, values)?))
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn pipelines(&self) -> &PipelineRegistry {
        &self.pipelines
    }
}
