// In: src/pipeline/mod.rs

//! The `Pipeline`: an ordered, named sequence of scalar transforms.
//!
//! Every value is passed through every step in insertion order, independently of
//! its neighbours, so `run` always returns a sequence of the same length and order
//! as its input. Steps own a cloned `TransformFn`, never a registry name.

use std::fmt;

use crate::transforms::{transform_fn, TransformFn};

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod builder;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::builder::{build_pipeline, PipelineRegistry};

/// Label given to steps appended without a name.
pub const ANONYMOUS_STEP: &str = "<anonymous>";

/// One resolved step of a pipeline.
#[derive(Clone)]
pub struct Step {
    /// Diagnostic label, usually the transform name the step was resolved from.
    pub label: String,
    func: TransformFn,
}

impl Step {
    pub fn new(label: impl Into<String>, func: TransformFn) -> Self {
        Self {
            label: label.into(),
            func,
        }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Applies a sequence of transforms to a sequence of numbers.
#[derive(Clone, Debug)]
pub struct Pipeline {
    name: String,
    steps: Vec<Step>,
}

impl Pipeline {
    /// Creates an empty pipeline. It is not registered anywhere.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends an unnamed step. Duplicates are allowed.
    pub fn add_step<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.push_step(Step::new(ANONYMOUS_STEP, transform_fn(f)))
    }

    /// Appends a step carrying a diagnostic label.
    pub fn add_named_step(&mut self, label: impl Into<String>, func: TransformFn) -> &mut Self {
        self.push_step(Step::new(label, func))
    }

    fn push_step(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Passes a single value through every step in order.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        self.steps.iter().fold(x, |v, step| step.apply(v))
    }

    /// Runs every value through the pipeline, producing a new sequence of the same
    /// length and order. The input is not modified.
    pub fn run(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.label.as_str()).collect()
    }
}
