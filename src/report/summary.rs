// In: src/report/summary.rs

//! Count, min, max and mean over a value sequence, plus the pretty printed form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary statistics over a value sequence.
///
/// `min`, `max` and `mean` are `None` for an empty sequence.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl Summary {
    /// The summary of an empty sequence.
    pub const EMPTY: Summary = Summary {
        count: 0,
        min: None,
        max: None,
        mean: None,
    };

    /// Renders the summary under a `Summary for {label}:` header.
    pub fn render(&self, label: &str) -> String {
        format!("Summary for {}:\n{}", label, self)
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "None".to_string(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {:>5}: {}", "count", self.count)?;
        writeln!(f, "  {:>5}: {}", "min", fmt_stat(self.min))?;
        writeln!(f, "  {:>5}: {}", "max", fmt_stat(self.max))?;
        write!(f, "  {:>5}: {}", "mean", fmt_stat(self.mean))
    }
}

/// Computes count, min, max and arithmetic mean using plain summation.
pub fn summarize(values: &[f64]) -> Summary {
    if values.is_empty() {
        return Summary::EMPTY;
    }
    let (min, max) = min_max(values);
    let total: f64 = values.iter().sum();
    Summary {
        count: values.len(),
        min: Some(min),
        max: Some(max),
        mean: Some(total / values.len() as f64),
    }
}

/// Minimum and maximum of a non-empty slice.
///
/// NaN propagates: any NaN input makes both bounds NaN, so `min <= max` is never
/// reported falsely.
pub(crate) fn min_max(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}

/// Element-wise `b[i] - a[i]`, truncated to the shorter input.
pub fn elementwise_difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| y - x).collect()
}
