use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by lookups and catalog downloads.
///
/// Nothing here is retried or defaulted; every variant reaches the caller as-is.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to decompress city catalog")]
    Decompression(#[source] std::io::Error),

    #[error("Failed to parse provider JSON")]
    Parse(#[source] serde_json::Error),

    #[error("Missing field `{path}` in provider document")]
    FieldMissing { path: String },

    #[error("Field `{path}` in provider document is not {expected}")]
    TypeMismatch { path: String, expected: &'static str },

    #[error("Unknown weather condition code {0}")]
    UnknownCondition(i64),
}

/// The HTTP round trip itself did not succeed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request to weather provider failed")]
    Http(#[source] reqwest::Error),

    #[error("Weather provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ForecastError {
    pub(crate) fn missing(path: &str) -> Self {
        Self::FieldMissing { path: path.to_string() }
    }

    pub(crate) fn mismatch(path: &str, expected: &'static str) -> Self {
        Self::TypeMismatch { path: path.to_string(), expected }
    }

    /// True for the schema violations a catalog entry can be skipped for.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::FieldMissing { .. } | Self::TypeMismatch { .. })
    }
}

impl From<reqwest::Error> for TransportError {
    // The request URL carries the API key.
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl TransportError {
    pub(crate) fn status(status: StatusCode, body: &str) -> Self {
        Self::Status { status, body: truncate_body(body) }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
