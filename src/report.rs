//! User-facing diagnostics for network failures.
//!
//! The transport and the category client never print directly; they hand
//! their fixed messages to an injected [`Reporter`] so tests can assert on
//! exactly which message was emitted.

use log::{Level, Log, Metadata, Record};

/// Log target every reported message is emitted under.
pub const TARGET: &str = "swapi_export";

#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards every message to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    fn log_to(&self, logger: &dyn Log, message: &str) {
        let metadata = Metadata::builder().level(Level::Warn).target(TARGET).build();
        if !logger.enabled(&metadata) {
            return;
        }

        logger.log(
            &Record::builder()
                .metadata(metadata)
                .args(format_args!("{}", message))
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .build(),
        );
    }
}

impl Reporter for LogReporter {
    fn warn(&self, message: &str) {
        if Level::Warn <= log::max_level() {
            self.log_to(log::logger(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Keeps every record it receives.
    #[derive(Default)]
    struct CapturingLogger {
        records: Mutex<Vec<(Level, String, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.records.lock().unwrap().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_log_reporter_emits_warning_on_crate_target() {
        let logger = CapturingLogger::default();

        LogReporter.log_to(&logger, "No categories available.");

        let records = logger.records.lock().unwrap();
        assert_eq!(
            *records,
            vec![(
                Level::Warn,
                "swapi_export".to_string(),
                "No categories available.".to_string()
            )]
        );
    }

    #[test]
    fn test_log_reporter_respects_disabled_logger() {
        struct Silent;

        impl Log for Silent {
            fn enabled(&self, _metadata: &Metadata) -> bool {
                false
            }

            fn log(&self, _record: &Record) {
                panic!("disabled logger must not receive records");
            }

            fn flush(&self) {}
        }

        LogReporter.log_to(&Silent, "dropped");
    }

    #[test_log::test]
    fn test_log_reporter_as_trait_object() {
        let reporter: Arc<dyn Reporter> = Arc::new(LogReporter);
        reporter.warn("shared reporter");
    }
}
