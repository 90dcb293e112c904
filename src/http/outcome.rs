//! Outcome of a single GET and the classification of its failures.

use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::fmt;

/// Body of a GET that came back with a 2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    body: String,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body text, exactly as received.
    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn into_text(self) -> String {
        self.body
    }

    /// Parses the body as a JSON object (key-value document).
    pub fn document(&self) -> serde_json::Result<Map<String, Value>> {
        serde_json::from_str(self.text())
    }
}

/// Why a GET produced no usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server answered with a non-2xx status.
    Http,
    /// No connection to the host could be established.
    Connection,
    /// Any other transport failure (timeout, malformed URL, unreadable body).
    Request,
}

impl FailureKind {
    /// The fixed diagnostic reported for this kind of failure.
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::Http => "An HTTP error occurred while processing the request.",
            FailureKind::Connection => "A network error occurred while processing the request.",
            FailureKind::Request => "An error occurred while performing the request.",
        }
    }

    /// Maps a reqwest error onto a failure kind.
    ///
    /// Connect timeouts count as connection errors; every other timeout is a
    /// generic request error.
    pub fn classify(error: &reqwest::Error) -> Self {
        if error.is_status() {
            FailureKind::Http
        } else if error.is_connect() {
            FailureKind::Connection
        } else {
            FailureKind::Request
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Http => write!(f, "http error"),
            FailureKind::Connection => write!(f, "connection error"),
            FailureKind::Request => write!(f, "request error"),
        }
    }
}

/// Result of [`Transport::get`](super::Transport::get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Success(Response),
    Failure(FailureKind),
}
