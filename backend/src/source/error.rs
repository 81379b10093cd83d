//! Error types for holiday source operations.

use crate::models::SchoolYear;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type for fetching a school-year document.
///
/// The availability probe treats every variant as "year not published";
/// a display fetch surfaces the message to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source answered with a non-success status.
    #[error("API fetch failed ({status})")]
    Http { status: u16, school_year: SchoolYear },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Transport error: {message}")]
    Transport { message: String, timed_out: bool },

    /// The response body was not valid JSON.
    #[error("Malformed response body for {school_year}: {message}")]
    MalformedBody { message: String, school_year: SchoolYear },

    /// The source could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SourceError {
    pub fn http(status: u16, school_year: SchoolYear) -> Self {
        Self::Http { status, school_year }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            timed_out: true,
        }
    }

    pub fn malformed(message: impl Into<String>, school_year: SchoolYear) -> Self {
        Self::MalformedBody {
            message: message.into(),
            school_year,
        }
    }

    /// HTTP status of the failed request, if there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

