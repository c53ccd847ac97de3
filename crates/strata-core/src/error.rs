//! Configuration errors for diagnostic arguments.

use std::error::Error;
use std::fmt;

/// An illegal argument supplied by the driver.
///
/// Configuration errors are raised before any I/O or communication
/// happens, so no partial report file and no dangling collective
/// operation can result from them. The calling driver treats them as
/// fatal for the whole process group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested refinement level is outside the operation's valid
    /// range `[0, bound)`.
    ///
    /// Note the bound differs per operation: the finiteness check
    /// accepts every level of the hierarchy, while the exchange reports
    /// stop one level short because exchange lists only exist between
    /// adjacent levels.
    LevelOutOfRange {
        /// The offending level.
        level: u32,
        /// Exclusive upper bound of the valid range.
        bound: u32,
    },
    /// A raw slice-axis value outside `{0, 1, 2}`.
    InvalidAxis {
        /// The offending value.
        value: i32,
    },
    /// A raw exchange-kind value outside `{0, 1}`.
    InvalidExchangeKind {
        /// The offending value.
        value: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelOutOfRange { level, bound } => {
                write!(f, "level {level} outside valid range [0, {bound})")
            }
            Self::InvalidAxis { value } => {
                write!(f, "invalid slice axis {value} (expected 0, 1, or 2)")
            }
            Self::InvalidExchangeKind { value } => {
                write!(f, "invalid exchange kind {value} (expected 0 = send, 1 = recv)")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = ConfigError::LevelOutOfRange { level: 5, bound: 4 };
        assert_eq!(e.to_string(), "level 5 outside valid range [0, 4)");

        let e = ConfigError::InvalidAxis { value: 3 };
        assert!(e.to_string().contains("3"));

        let e = ConfigError::InvalidExchangeKind { value: -1 };
        assert!(e.to_string().contains("-1"));
    }
}
