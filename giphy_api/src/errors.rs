//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP transport failed before a response body could be read.
    #[error("http transport error")]
    Transport(#[source] reqwest::Error),
    /// A request URL could not be constructed.
    #[error("invalid request url")]
    InvalidUrl(#[from] url::ParseError),
    /// The response body was not valid JSON.
    #[error("response body is not valid json")]
    Decode(#[source] serde_json::Error),
    /// The envelope decoded but the API reported a non-success status.
    #[error("api error {status}: {msg}")]
    Api {
        /// The `meta.status` code reported by the API.
        status: i64,
        /// The server-provided `meta.msg` message.
        msg: String,
    },
    /// A required field was missing or malformed in an otherwise valid response.
    #[error("malformed response data: {0}")]
    DataFormat(String),
}
