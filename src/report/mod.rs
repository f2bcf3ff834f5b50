//! Statistics and run-context reporting.
//!
//! Two reporting paths exist and they treat empty input differently:
//! `summarize` reports `None` for min/max/mean, while `run_with_context` reports
//! `0.0` for every range field. Both behaviors are part of the public contract.

pub mod context;
pub mod summary;

pub use self::context::{run_with_context, PipelineRunContext, SPAN_EPSILON};
pub use self::summary::{elementwise_difference, summarize, Summary};
