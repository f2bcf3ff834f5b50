//! This module provides observability and diagnostics for the engine.
//!
//! Registration, pipeline construction and run-context reporting all log through
//! the `log` facade; the host decides whether anything is printed by installing a
//! logger. `enable_verbose_logging` installs the default `env_logger` backend.
//!
//! The `log_metric!` macro emits structured key/value lines. It is compiled out of
//! release builds.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Once;

use log::LevelFilter;

use crate::error::NumpipeError;

/// Logs a structured key-value metric line at `debug` level, only in debug builds.
///
/// # Example
/// ```ignore
/// let steps = 3;
/// log_metric!("event" = "build_pipeline", "name" = "smooth", "steps" = &steps);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let fields = [$(($key, $value.to_string())),+];
            ::log::debug!("{}", $crate::observability::metric_line(&fields));
        }
    };
}

/// Renders `fields` as the `NUMPIPE_METRIC: { "k": "v", ... }` line.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn metric_line(fields: &[(&str, String)]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("\"{}\": \"{}\"", key, value))
        .collect();
    format!("NUMPIPE_METRIC: {{ {} }}", parts.join(", "))
}

static INIT_LOGGER: Once = Once::new();

fn open_log_target(log_file: Option<&str>) -> Result<Option<File>, NumpipeError> {
    match log_file {
        Some(path) => Ok(Some(OpenOptions::new().append(true).create(true).open(path)?)),
        None => Ok(None),
    }
}

/// Installs an `env_logger` backend at `Info` level, printing `[LEVEL] message`.
///
/// When `log_file` is given, records are appended to that file instead of stderr.
/// An unopenable `log_file` is always an error; otherwise only the first call has
/// any effect.
pub fn enable_verbose_logging(log_file: Option<&str>) -> Result<(), NumpipeError> {
    let file = open_log_target(log_file)?;
    if INIT_LOGGER.is_completed() {
        return Ok(());
    }

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        // Another logger may already be installed by the host; that one wins.
        let _ = builder.try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_verbose_logging_is_idempotent() {
        assert!(enable_verbose_logging(None).is_ok());
        assert!(enable_verbose_logging(None).is_ok());
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("numpipe.log");
        let result = enable_verbose_logging(path.to_str());
        assert!(matches!(result, Err(NumpipeError::Io(_))));
    }

    #[test]
    fn test_log_target_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numpipe.log");
        std::fs::write(&path, "first\n").unwrap();

        let mut file = open_log_target(path.to_str()).unwrap().unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert!(open_log_target(None).unwrap().is_none());
    }

    #[test]
    fn test_metric_line_format() {
        let line = metric_line(&[("event", "build".to_string()), ("steps", 3.to_string())]);
        assert_eq!(line, r#"NUMPIPE_METRIC: { "event": "build", "steps": "3" }"#);
    }

    #[test]
    fn test_log_metric_borrows_its_values() {
        let name = String::from("smooth");
        let count = 4usize;
        log_metric!("event" = "test", "name" = name, "count" = count, "ratio" = 0.5);
        assert_eq!((name.as_str(), count), ("smooth", 4));
    }
}
