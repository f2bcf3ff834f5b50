//! This module defines the scalar transforms that pipelines are composed of.
//!
//! A transform is a pure, stateless `f64 -> f64` function. Transforms are shared
//! as `TransformFn` handles so a pipeline can hold its own copy of every step it
//! was built from, independently of later changes to the registry.

use std::sync::Arc;

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod builtins;
pub mod registry;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::builtins::{register_builtins, BUILTIN_NAMES};
pub use self::registry::TransformRegistry;

/// A shared handle to a pure scalar transform.
pub type TransformFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Wraps a plain function or closure into a `TransformFn`.
pub fn transform_fn<F>(f: F) -> TransformFn
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    Arc::new(f)
}
