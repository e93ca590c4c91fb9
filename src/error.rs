use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Failure raised by one pipeline stage, classified where it happens.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("not an absolute http(s) URL: {0:?}")]
    InvalidUrl(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("request to {url} timed out after {}s", .timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("page content is empty")]
    EmptyContent,
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::InvalidUrl(_) => ErrorKind::Validation,
            ScrapeError::HttpStatus { .. }
            | ScrapeError::Timeout { .. }
            | ScrapeError::Transport(_) => ErrorKind::Network,
            ScrapeError::EmptyContent => ErrorKind::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "ValidationError")]
    Validation,
    #[serde(rename = "NetworkError")]
    Network,
    #[serde(rename = "ParseError")]
    Parse,
}

/// What the caller sees when `run_extraction` fails.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<ScrapeError> for ErrorReport {
    fn from(err: ScrapeError) -> Self {
        let kind = err.kind();
        let message = match kind {
            ErrorKind::Validation => format!("Please enter a valid URL ({err})"),
            ErrorKind::Network => format!("Error fetching the website: {err}"),
            ErrorKind::Parse => format!("An error occurred: {err}"),
        };
        ErrorReport { kind, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_is_network() {
        let err = ScrapeError::HttpStatus {
            status: StatusCode::NOT_FOUND,
            url: "http://site.com/missing".into(),
        };
        let report = ErrorReport::from(err);
        assert_eq!(report.kind, ErrorKind::Network);
        assert!(report.message.starts_with("Error fetching the website"));
        assert!(report.message.contains("404"));
    }

    #[test]
    fn timeout_message_names_duration() {
        let err = ScrapeError::Timeout {
            url: "http://site.com".into(),
            timeout: Duration::from_secs(15),
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("timed out after 15s"));
    }

    #[test]
    fn empty_content_is_parse_error() {
        let report = ErrorReport::from(ScrapeError::EmptyContent);
        assert_eq!(report.kind, ErrorKind::Parse);
        assert_eq!(report.message, "An error occurred: page content is empty");
    }

    #[test]
    fn invalid_url_is_validation_error() {
        let report = ErrorReport::from(ScrapeError::InvalidUrl("ftp://x".into()));
        assert_eq!(report.kind, ErrorKind::Validation);
        assert!(report.message.contains("ftp://x"));
    }

    #[test]
    fn report_serializes_kind_names() {
        let report = ErrorReport::from(ScrapeError::EmptyContent);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "ParseError");
    }
}
