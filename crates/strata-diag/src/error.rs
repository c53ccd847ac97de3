//! Error type for the file-producing diagnostic passes.

use std::error::Error;
use std::fmt;
use std::io;

use strata_core::ConfigError;

/// Failure of a report-writing pass.
///
/// Configuration errors are raised before any file is touched, so an
/// `Err` of that variant guarantees no partial output exists.
#[derive(Debug)]
pub enum DiagError {
    /// An illegal argument, caught before any I/O.
    Config(ConfigError),
    /// The report file could not be created or written.
    Io(io::Error),
}

impl fmt::Display for DiagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Io(e) => write!(f, "report i/o failed: {e}"),
        }
    }
}

impl Error for DiagError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for DiagError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for DiagError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_failing_subsystem() {
        let e = DiagError::from(ConfigError::InvalidAxis { value: 9 });
        assert!(e.to_string().starts_with("configuration error:"));

        let e = DiagError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(e.to_string().contains("disk full"));
    }
}
