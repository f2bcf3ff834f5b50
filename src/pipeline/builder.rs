// In: src/pipeline/builder.rs

//! Builds named pipelines from lists of transform names.
//!
//! Building is validated up front and is atomic: either every step name resolves
//! and the pipeline is registered, or an error is returned and the
//! `PipelineRegistry` is left untouched.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use super::Pipeline;
use crate::error::NumpipeError;
use crate::transforms::TransformRegistry;

//==================================================================================
// 1. Pipeline Registry
//==================================================================================
/// The name -> pipeline registry.
///
/// Unlike `TransformRegistry`, duplicate names are rejected: a pipeline name, once
/// registered, always refers to the same pipeline.
#[derive(Clone, Default)]
pub struct PipelineRegistry {
    pipelines: HashMap<String, Arc<Pipeline>>,
}

impl PipelineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Pipeline>> {
        self.pipelines.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pipelines.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Registered names, sorted for stable diagnostics.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pipelines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registers `pipeline` under its own name. Fails if the name is taken.
    pub(crate) fn insert(&mut self, pipeline: Pipeline) -> Result<Arc<Pipeline>, NumpipeError> {
        if self.contains(pipeline.name()) {
            return Err(NumpipeError::DuplicatePipeline(pipeline.name().to_string()));
        }
        let pipeline = Arc::new(pipeline);
        self.pipelines
            .insert(pipeline.name().to_string(), Arc::clone(&pipeline));
        Ok(pipeline)
    }
}

impl fmt::Debug for PipelineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.names()
                    .into_iter()
                    .filter_map(|name| self.pipelines.get(name).map(|p| (name, p.step_names()))),
            )
            .finish()
    }
}

//==================================================================================
// 2. Builder
//==================================================================================
/// Creates a pipeline from a list of transform names and registers it.
///
/// 1. `name` already registered -> `DuplicatePipeline`.
/// 2. Any name absent from `transforms` -> `UnknownTransforms` carrying every
///    missing name in the order given.
/// 3. Otherwise each name is resolved, appended in order, and the pipeline is
///    registered under `name`.
pub fn build_pipeline<S: AsRef<str>>(
    transforms: &TransformRegistry,
    pipelines: &mut PipelineRegistry,
    name: &str,
    step_names: &[S],
) -> Result<Arc<Pipeline>, NumpipeError> {
    if pipelines.contains(name) {
        return Err(NumpipeError::DuplicatePipeline(name.to_string()));
    }

    let missing = transforms.missing(step_names);
    if !missing.is_empty() {
        log::debug!("Rejected pipeline '{}': unknown transforms {:?}", name, missing);
        return Err(NumpipeError::UnknownTransforms(missing));
    }

    let mut pipe = Pipeline::new(name);
    for step_name in step_names {
        let step_name = step_name.as_ref();
        pipe.add_named_step(step_name, transforms.lookup(step_name)?);
    }

    let pipe = pipelines.insert(pipe)?;
    log::info!("Built pipeline '{}' with steps {:?}", name, pipe.step_names());
    log_metric!("event" = "build_pipeline", "name" = name, "steps" = pipe.len());
    Ok(pipe)
}
