// In: src/report/context.rs

//! Run a registered pipeline by name and capture how it changed the value range.

use serde::{Deserialize, Serialize};

use super::summary::min_max;
use crate::error::NumpipeError;
use crate::pipeline::PipelineRegistry;

/// Added to the input span so an all-equal input never divides by zero.
pub const SPAN_EPSILON: f64 = 1e-9;

/// Extra information about one execution of a named pipeline.
///
/// Created fresh per run and never stored by the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PipelineRunContext {
    pub name: String,
    pub input_count: usize,
    pub min_before: f64,
    pub max_before: f64,
    pub min_after: f64,
    pub max_after: f64,
}

impl PipelineRunContext {
    /// The context reported for an empty input: every range field is `0.0`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_count: 0,
            min_before: 0.0,
            max_before: 0.0,
            min_after: 0.0,
            max_after: 0.0,
        }
    }

    pub fn span_before(&self) -> f64 {
        self.max_before - self.min_before
    }

    pub fn span_after(&self) -> f64 {
        self.max_after - self.min_after
    }

    /// Ratio of output range to input range: `> 1` means the pipeline spread the
    /// data out, `< 1` means it compressed it.
    ///
    /// `None` for an empty run; the metric is only defined on non-empty contexts.
    pub fn relative_span_change(&self) -> Option<f64> {
        if self.input_count == 0 {
            return None;
        }
        Some(self.span_after() / (self.span_before() + SPAN_EPSILON))
    }

    /// One-line description, e.g. `[boost] items=2, span_before=4.0000, span_after=8.0000`.
    pub fn describe(&self) -> String {
        format!(
            "[{}] items={}, span_before={:.4}, span_after={:.4}",
            self.name,
            self.input_count,
            self.span_before(),
            self.span_after()
        )
    }
}

/// Runs the pipeline registered as `name` over `values` and reports the range of
/// the data before and after.
pub fn run_with_context(
    pipelines: &PipelineRegistry,
    name: &str,
    values: &[f64],
) -> Result<PipelineRunContext, NumpipeError> {
    let pipe = pipelines
        .get(name)
        .ok_or_else(|| NumpipeError::UnknownPipeline(name.to_string()))?;

    if values.is_empty() {
        return Ok(PipelineRunContext::empty(name));
    }

    let (min_before, max_before) = min_max(values);
    let output = pipe.run(values);
    let (min_after, max_after) = min_max(&output);

    let ctx = PipelineRunContext {
        name: name.to_string(),
        input_count: values.len(),
        min_before,
        max_before,
        min_after,
        max_after,
    };
    log::info!("{}", ctx.describe());
    log_metric!(
        "event" = "run_with_context",
        "name" = name,
        "items" = ctx.input_count,
        "span_after" = ctx.span_after()
    );
    Ok(ctx)
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::build_pipeline;
    use crate::transforms::{transform_fn, TransformRegistry};

    fn registry_with(name: &str, steps: &[&str]) -> PipelineRegistry {
        let transforms = TransformRegistry::with_builtins();
        let mut pipelines = PipelineRegistry::new();
        build_pipeline(&transforms, &mut pipelines, name, steps).unwrap();
        pipelines
    }

    #[test]
    fn test_unknown_pipeline() {
        let pipelines = PipelineRegistry::new();
        let result = run_with_context(&pipelines, "ghost", &[1.0]);
        assert!(matches!(result, Err(NumpipeError::UnknownPipeline(ref n)) if n == "ghost"));
    }

    #[test]
    fn test_unknown_pipeline_checked_before_empty_input() {
        let pipelines = PipelineRegistry::new();
        assert!(run_with_context(&pipelines, "ghost", &[]).is_err());
    }

    #[test]
    fn test_empty_input_reports_zeroes() {
        let pipelines = registry_with("smooth", &["center", "square", "clip_0_2"]);
        let ctx = run_with_context(&pipelines, "smooth", &[]).unwrap();
        assert_eq!(ctx, PipelineRunContext::empty("smooth"));
        assert_eq!(ctx.relative_span_change(), None);
    }

    #[test]
    fn test_boost_context_and_span_change() {
        let pipelines = registry_with("boost", &["sqrt_plus_one", "square"]);
        let ctx = run_with_context(&pipelines, "boost", &[0.0, 4.0]).unwrap();

        assert_eq!(ctx.input_count, 2);
        assert_eq!(ctx.min_before, 0.0);
        assert_eq!(ctx.max_before, 4.0);
        assert_eq!(ctx.min_after, 1.0);
        assert_eq!(ctx.max_after, 9.0);

        let change = ctx.relative_span_change().unwrap();
        assert!((change - 2.0).abs() < 1e-6, "got {change}");
        assert_eq!(
            ctx.describe(),
            "[boost] items=2, span_before=4.0000, span_after=8.0000"
        );
    }

    #[test]
    fn test_constant_input_does_not_divide_by_zero() {
        let pipelines = registry_with("sq", &["square"]);
        let ctx = run_with_context(&pipelines, "sq", &[3.0, 3.0, 3.0]).unwrap();
        let change = ctx.relative_span_change().unwrap();
        assert!(change.is_finite());
        assert_eq!(change, 0.0);
    }

    #[test]
    fn test_compression_below_one() {
        let pipelines = registry_with("clip", &["clip_0_2"]);
        let ctx = run_with_context(&pipelines, "clip", &[-10.0, 10.0]).unwrap();
        assert_eq!((ctx.min_after, ctx.max_after), (0.0, 2.0));
        assert!(ctx.relative_span_change().unwrap() < 1.0);
    }

    #[test]
    fn test_all_nan_outputs_propagate_to_span_change() {
        let mut transforms = TransformRegistry::new();
        transforms.register("ln", transform_fn(f64::ln));
        let mut pipelines = PipelineRegistry::new();
        build_pipeline(&transforms, &mut pipelines, "log", &["ln"]).unwrap();

        let ctx = run_with_context(&pipelines, "log", &[-1.0, -2.0]).unwrap();
        assert_eq!((ctx.min_before, ctx.max_before), (-2.0, -1.0));
        assert!(ctx.min_after.is_nan());
        assert!(ctx.max_after.is_nan());
        assert!(ctx.relative_span_change().unwrap().is_nan());
    }

    #[test]
    fn test_context_json_roundtrip() {
        let pipelines = registry_with("boost", &["sqrt_plus_one", "square"]);
        let ctx = run_with_context(&pipelines, "boost", &[0.0, 4.0]).unwrap();
        let json = serde_json::to_string(&ctx).unwrap();
        let back: PipelineRunContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
