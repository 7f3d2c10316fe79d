use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidUrl,
    Timeout,
    CertificateValidation,
    ConnectionRefused,
    Network,
    MissingScheme,
    MissingHost,
    RedirectParseFailure,
}

impl ErrorKind {
    /// Conditions of the remote side rather than faults in the trace itself.
    pub fn is_user_facing(self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout | ErrorKind::CertificateValidation | ErrorKind::ConnectionRefused
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidUrl => write!(f, "invalid url"),
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::CertificateValidation => write!(f, "certificate validation failed"),
            ErrorKind::ConnectionRefused => write!(f, "connection refused"),
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::MissingScheme => write!(f, "missing scheme for relative redirect"),
            ErrorKind::MissingHost => write!(f, "missing host for relative redirect"),
            ErrorKind::RedirectParseFailure => write!(f, "unparsable redirect location"),
        }
    }
}

/// Failure to turn a `Location` header into an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("missing scheme for relative redirect {location:?}")]
    MissingScheme { location: String },
    #[error("missing host for relative redirect {location:?}")]
    MissingHost { location: String },
    #[error("cannot parse redirect location {location:?}: {reason}")]
    Parse { location: String, reason: String },
}

impl RedirectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RedirectError::MissingScheme { .. } => ErrorKind::MissingScheme,
            RedirectError::MissingHost { .. } => ErrorKind::MissingHost,
            RedirectError::Parse { .. } => ErrorKind::RedirectParseFailure,
        }
    }
}
