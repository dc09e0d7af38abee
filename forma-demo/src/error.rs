use thiserror::Error;

/// Errors that stop the demo before or while it runs.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Could not determine a cache directory for the log file")]
    NoCacheDir,

    #[error("Invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}
