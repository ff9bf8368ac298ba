// API client errors

use formdesk_core::ErrorPayload;

/// API client error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client-side configuration is unusable (empty token, bad base URL)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No API token has been configured; nothing was sent
    #[error("API token not provided")]
    MissingCredential,

    /// The requested HTTP verb is outside the supported set
    #[error("method not supported: {0}")]
    UnsupportedMethod(String),

    /// The request body could not be serialized to JSON
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request never produced a usable response
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decompressed or deserialized
    #[error("failed to decode response: {0}")]
    Decoding(String),

    /// The service answered with a non-success status and an error payload
    #[error("HTTP status {status}: {payload}")]
    RemoteApi { status: u16, payload: ErrorPayload },
}
