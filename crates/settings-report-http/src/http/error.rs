//! HTTP error handling utilities

use settings_report::ReportError;
use std::error::Error;

/// Render an error with its full `source()` chain, e.g.
/// `error sending request for url (...): connection refused`.
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

pub fn client_setup_error(err: reqwest::Error) -> ReportError {
    ReportError::ClientSetup {
        reason: error_chain(&err),
    }
}

pub fn request_build_error(url: &str, err: reqwest::Error) -> ReportError {
    ReportError::RequestBuild {
        url: url.to_string(),
        reason: error_chain(&err),
    }
}

/// A base address without a scheme parses only as a relative URL, which no
/// client can send. Reported as a failed request, not a failed build.
pub fn missing_scheme_error(url: &str) -> ReportError {
    ReportError::Transport {
        url: url.to_string(),
        reason: format!("Get \"{url}\": unsupported protocol scheme \"\""),
    }
}

pub fn url_parse_error(url: &str, err: url::ParseError) -> ReportError {
    ReportError::RequestBuild {
        url: url.to_string(),
        reason: format!("invalid URL \"{url}\": {err}"),
    }
}

pub fn transport_error(url: &str, err: reqwest::Error) -> ReportError {
    ReportError::Transport {
        url: url.to_string(),
        reason: error_chain(&err),
    }
}

pub fn body_read_error(url: &str, err: reqwest::Error) -> ReportError {
    ReportError::BodyRead {
        url: url.to_string(),
        reason: error_chain(&err),
    }
}
