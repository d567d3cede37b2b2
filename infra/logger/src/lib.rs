//! # Logger
//!
//! One place to install the global `tracing` subscriber for every academy binary.
//!
//! * Console output is compact and colored.
//! * File output (opt-in via [`LoggerBuilder::path`]) rotates daily by default and is
//!   written through a non-blocking worker; it can switch to JSON lines.
//! * The default level applies unless `RUST_LOG` (or [`LoggerBuilder::env_filter`]) says otherwise.
//!
//! ## Example
//!
//! ```rust
//! # use academy_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("academy")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Line format of the file sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    stderr: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    directory: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    format: FileFormat,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            stderr: false,
            level: LevelFilter::INFO,
            env_filter: None,
            directory: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            format: FileFormat::Text,
        }
    }
}

/// Builder state: no name given yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state: named, ready to initialize.
#[derive(Debug)]
pub struct Named(String);
/// Builder state: console only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state: a log directory was configured.
#[derive(Debug)]
pub struct WithFile;

mod sealed {
    pub trait State {}
    impl State for super::Unnamed {}
    impl State for super::Named {}
    impl State for super::ConsoleOnly {}
    impl State for super::WithFile {}
}

/// Typestate builder for the global subscriber.
///
/// [`LoggerBuilder::init`] is only reachable once a name is set, and the file-only
/// knobs (rotation, retention, JSON) only once a directory is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: sealed::State = Unnamed, F: sealed::State = ConsoleOnly> {
    settings: LoggerSettings,
    name: N,
    sink: PhantomData<F>,
}

impl<F: sealed::State> LoggerBuilder<Unnamed, F> {
    /// Names the application; also the prefix of rolled files (`name.2026-01-01.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), sink: PhantomData }
    }
}

impl<F: sealed::State> LoggerBuilder<Named, F> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `academy_server=debug,tower_http=info`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.env_filter = Some(directives.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Sends console output to stderr, leaving stdout to the program.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn stderr(mut self) -> Self {
        self.settings.stderr = true;
        self
    }

    /// Enables file output into `directory`.
    pub fn path(self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggerBuilder { settings, name: self.name, sink: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole program: dropping it stops the
    /// background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retention, a bad
    ///   filter, or when no output is enabled.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let LoggerSettings {
            console,
            stderr,
            level,
            env_filter,
            directory,
            rotation,
            max_files,
            format,
        } = self.settings;
        let name = self.name.0;

        if name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty"));
        }
        if max_files == 0 {
            return Err(invalid("max_files must be greater than zero"));
        }

        let filter = build_filter(level, env_filter.as_deref())?;
        let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);

        if console {
            let layer = fmt::layer().compact().with_ansi(true);
            layers.push(if stderr {
                layer.with_writer(std::io::stderr).boxed()
            } else {
                layer.boxed()
            });
        }

        let guard = match directory {
            Some(directory) => {
                fs::create_dir_all(&directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Creating log directory {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(max_files)
                    .build(&directory)
                    .context(format!("Log directory {}", directory.display()))?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(match format {
                    FileFormat::Json => file.json().boxed(),
                    FileFormat::Text => file.boxed(),
                });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(invalid("No logging output enabled; enable the console or set a path"));
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, "Logger initialized");

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// How many rolled files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Writes the file sink as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.settings.format = FileFormat::Json;
        self
    }
}

/// Handle to the installed subscriber; holds the file writer guard, if any.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: Unnamed, sink: PhantomData }
    }

    /// Whether a file sink is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

fn invalid(message: &'static str) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

fn build_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid filter '{directives}': {e}").into(),
            context: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_builder_defaults() {
        let builder = Logger::builder().name("academy-test");
        assert!(builder.settings.console);
        assert!(!builder.settings.stderr);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.max_files, DEFAULT_MAX_FILES);
        assert_eq!(builder.settings.format, FileFormat::Text);
        assert!(builder.settings.directory.is_none());
    }

    #[test]
    fn test_file_options_are_recorded() {
        let builder = Logger::builder()
            .name("academy-test")
            .env_filter("academy=debug")
            .level(LevelFilter::WARN)
            .path("logs")
            .max_files(3)
            .json();

        assert_eq!(builder.settings.level, LevelFilter::WARN);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("academy=debug"));
        assert_eq!(builder.settings.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(builder.settings.max_files, 3);
        assert_eq!(builder.settings.format, FileFormat::Json);
    }

    #[test]
    #[serial]
    fn test_empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_bad_filter_is_rejected() {
        let err =
            Logger::builder().name("academy-test").env_filter("academy=loudest").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_no_output_is_rejected() {
        let err = Logger::builder().name("academy-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
