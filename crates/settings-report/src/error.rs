use std::fmt;

/// Fatal errors that end a report run.
///
/// A non-200 reply is not an error; it is reported as "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The HTTP client itself could not be configured.
    ClientSetup {
        reason: String,
    },
    /// The request could not be built, e.g. the URL does not parse or the
    /// token is not a valid header value.
    RequestBuild {
        url: String,
        reason: String,
    },
    /// Connection, DNS or TLS failure while sending the request.
    Transport {
        url: String,
        reason: String,
    },
    /// The 200 reply body could not be read to completion.
    BodyRead {
        url: String,
        reason: String,
    },
    /// The 200 reply body is not a JSON object.
    Decode {
        url: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErrorKind {
    ClientSetup,
    RequestBuild,
    Transport,
    BodyRead,
    Decode,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::ClientSetup { reason } => {
                write!(f, "Error creating HTTP client: {reason}")
            }
            ReportError::RequestBuild { reason, .. } => {
                write!(f, "Error creating request: {reason}")
            }
            ReportError::Transport { reason, .. } => write!(f, "Error on request: {reason}"),
            ReportError::BodyRead { reason, .. } => {
                write!(f, "Error reading response body: {reason}")
            }
            ReportError::Decode { reason, .. } => {
                write!(f, "Error unmarshalling response: {reason}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

impl ReportError {
    pub fn kind(&self) -> ReportErrorKind {
        match self {
            ReportError::ClientSetup { .. } => ReportErrorKind::ClientSetup,
            ReportError::RequestBuild { .. } => ReportErrorKind::RequestBuild,
            ReportError::Transport { .. } => ReportErrorKind::Transport,
            ReportError::BodyRead { .. } => ReportErrorKind::BodyRead,
            ReportError::Decode { .. } => ReportErrorKind::Decode,
        }
    }

    /// URL of the request that failed, if the error is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            ReportError::ClientSetup { .. } => None,
            ReportError::RequestBuild { url, .. }
            | ReportError::Transport { url, .. }
            | ReportError::BodyRead { url, .. }
            | ReportError::Decode { url, .. } => Some(url),
        }
    }

    pub fn decode(url: &str, e: impl fmt::Display) -> Self {
        ReportError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}
