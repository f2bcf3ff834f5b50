// In: src/transforms/registry.rs

//! The name -> transform registry.
//!
//! Re-registration policy: **last writer wins**. Registering a name that already
//! exists replaces the previous transform (a warning is logged). This differs on
//! purpose from `PipelineRegistry`, which rejects duplicate names: transforms are
//! meant to be overridable, pipelines are stable identifiers. Pipelines that were
//! already built keep the transform they captured and are not affected.

use std::fmt;

use hashbrown::HashMap;

use super::builtins::register_builtins;
use super::TransformFn;
use crate::error::NumpipeError;

#[derive(Clone, Default)]
pub struct TransformRegistry {
    transforms: HashMap<String, TransformFn>,
}

impl TransformRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the built-in transforms.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Inserts `transform` under `name`, returning the transform it replaced, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transform: TransformFn,
    ) -> Option<TransformFn> {
        let name = name.into();
        let previous = self.transforms.insert(name.clone(), transform);
        if previous.is_some() {
            log::warn!("Transform '{}' re-registered; previous definition replaced", name);
        } else {
            log::debug!("Registered transform '{}'", name);
        }
        previous
    }

    /// Resolves `name` to a cloned transform handle.
    pub fn lookup(&self, name: &str) -> Result<TransformFn, NumpipeError> {
        self.transforms
            .get(name)
            .cloned()
            .ok_or_else(|| NumpipeError::TransformNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Returns the subsequence of `names` that is not registered, order preserved.
    pub fn missing<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !self.contains(name))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Registered names, sorted for stable diagnostics.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("transforms", &self.names())
            .finish()
    }
}
