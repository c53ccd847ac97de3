//! Exchange-direction selector for flux-list reports.

use std::fmt;

use strata_core::ConfigError;

/// Which flux exchange lists a report covers: outgoing or incoming.
///
/// Raw driver integers convert through `TryFrom<i32>` with 0 = send and
/// 1 = recv; everything else is rejected. (The legacy dispatch had a
/// third, undocumented option value that fell through to an empty
/// listing; it is not representable here.)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExchangeKind {
    /// Patches scheduled to send flux data to neighbor ranks.
    Send,
    /// Patches scheduled to receive flux data from neighbor ranks.
    Recv,
}

impl ExchangeKind {
    /// Report file-name prefix for this kind.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ExchangeKind::Send => "SendFluxPatchList",
            ExchangeKind::Recv => "RecvFluxPatchList",
        }
    }
}

impl TryFrom<i32> for ExchangeKind {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ExchangeKind::Send),
            1 => Ok(ExchangeKind::Recv),
            _ => Err(ConfigError::InvalidExchangeKind { value }),
        }
    }
}

impl fmt::Display for ExchangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeKind::Send => write!(f, "send"),
            ExchangeKind::Recv => write!(f, "recv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_values_convert() {
        assert_eq!(ExchangeKind::try_from(0), Ok(ExchangeKind::Send));
        assert_eq!(ExchangeKind::try_from(1), Ok(ExchangeKind::Recv));
    }

    #[test]
    fn undocumented_values_are_rejected() {
        assert_eq!(
            ExchangeKind::try_from(2),
            Err(ConfigError::InvalidExchangeKind { value: 2 })
        );
        assert_eq!(
            ExchangeKind::try_from(-1),
            Err(ConfigError::InvalidExchangeKind { value: -1 })
        );
    }

    #[test]
    fn file_prefixes_distinguish_the_kinds() {
        assert_eq!(ExchangeKind::Send.file_prefix(), "SendFluxPatchList");
        assert_eq!(ExchangeKind::Recv.file_prefix(), "RecvFluxPatchList");
    }
}
