//! Error types for the API client.

/// A failure response (status >= 400) returned by the Compass API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{status}: {reason}{}", body_suffix(.text))]
pub struct HttpError {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Reason phrase for the status (e.g. "Not Found").
    pub reason: String,
    /// Raw response body text.
    pub text: String,
}

fn body_suffix(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" - {}", text)
    }
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a failure status.
    #[error("{0}")]
    Http(#[from] HttpError),
    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A body could not be encoded, or the response was not the JSON we expected.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
    /// A token, firm id or API key cannot be sent as a header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    /// The request URL could not be built from the API root.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// An update was attempted with a record that has no usable id field.
    #[error("Record has no usable `{0}` field")]
    MissingId(&'static str),
    /// The token endpoint succeeded but its body held no `UserToken`.
    #[error("Token response did not contain a UserToken")]
    MissingUserToken,
}

pub type Result<T> = std::result::Result<T, Error>;
