/// Errors raised while validating options and reading gap statistics reports
///
/// A report that yields no boundaries is not an error; see `io::report::NO_OUTPUT`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad command line or selector setting (threshold range, missing input)
    #[error("invalid parameter: {0}")]
    Parameter(String),

    #[error("I/O error: {source} ({path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Unreadable report content (bad UTF-8, corrupt gzip stream)
    #[error("gap statistics report error: {0}")]
    Report(String),
}

impl Error {
    /// Convenience for wrapping an `io::Error` with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            path: PathBuf::from("<unknown>"),
        }
    }
}
