//! Demo host for the numpipe engine.
//!
//! Usage: `numpipe-demo [--verbose] [--config <path>]`
//!
//! Without `--config` the built-in `smooth` and `boost` pipelines are used.

use std::path::PathBuf;

use clap::Parser;
use colored::*;

use numpipe::{
    elementwise_difference, enable_verbose_logging, number_stream, summarize, Engine,
    EngineConfig, NumpipeError, PipelineSpec,
};

#[derive(Debug, Parser)]
#[command(name = "numpipe-demo")]
#[command(about = "Runs the numpipe demo pipelines over a deterministic number stream")]
struct Cli {
    /// Install the default logger at info level.
    #[arg(short, long)]
    verbose: bool,

    /// JSON engine config to load instead of the built-in `smooth` and `boost` pipelines.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn default_config() -> EngineConfig {
    EngineConfig {
        pipelines: vec![
            PipelineSpec::new("smooth", ["center", "square", "clip_0_2"]),
            PipelineSpec::new("boost", ["sqrt_plus_one", "square"]),
        ],
        ..EngineConfig::default()
    }
}

/// Runs `smooth` and `boost` over the same stream and compares them.
fn pipeline_demo(engine: &Engine) -> Result<(), NumpipeError> {
    let raw: Vec<f64> = number_stream(20).collect();

    let smooth = engine.run("smooth", &raw)?;
    let boost = engine.run("boost", &raw)?;
    let diff = elementwise_difference(&smooth, &boost);

    for (label, values) in [
        ("raw", &raw),
        ("smooth", &smooth),
        ("boost", &boost),
        ("boost_minus_smooth", &diff),
    ] {
        println!("{}", summarize(values).render(label));
    }
    Ok(())
}

/// Builds `normalized_boost` on demand and reports its run context.
fn context_demo(engine: &mut Engine) -> Result<(), NumpipeError> {
    let data: Vec<f64> = number_stream(10).collect();

    if engine.pipeline("normalized_boost").is_none() {
        engine.build_pipeline("normalized_boost", &["sqrt_plus_one", "square"])?;
    }

    let ctx = engine.run_with_context("normalized_boost", &data)?;
    println!("{}", ctx.describe());

    if let Some(change) = ctx.relative_span_change() {
        println!("[{}] relative_span_change={:.4}", ctx.name, change);
    }
    Ok(())
}

fn main() -> Result<(), NumpipeError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => default_config(),
    };
    if cli.verbose || config.verbose_logging {
        enable_verbose_logging(None)?;
    }

    let mut engine = Engine::from_config(&config)?;
    println!("{}", format!("=== numpipe {} ===", numpipe::VERSION).bold());

    pipeline_demo(&engine)?;

    println!("\n{}", "--- Additional demo ---".bold());
    context_demo(&mut engine)?;

    Ok(())
}
