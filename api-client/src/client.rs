// Formdesk HTTP client and request dispatcher

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT_ENCODING, CONNECTION, CONTENT_ENCODING,
    CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Method;
use serde::Serialize;
use tokio::sync::RwLock;
use url::Url;

use crate::errors::Error;
use formdesk_core::{ApiVersion, ErrorPayload};

/// Domain requests are sent to unless the builder overrides it
pub const DEFAULT_API_DOMAIN: &str = "https://api.formdesk.io/";

/// Header carrying the API token on every request
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Client identifier sent as the default User-Agent
pub const CLIENT_USER_AGENT: &str = concat!("formdesk-api-client/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Typed client for the Formdesk API.
///
/// Holds the shared HTTP transport, the base URL, the targeted API version
/// and the API token. Cloning is cheap and clones share the transport and
/// the token, so one logical client can serve concurrent tasks.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_version: ApiVersion,
    api_key: Arc<RwLock<String>>,
}

/// Builder for configuring a [`Client`]
#[derive(Debug)]
pub struct ClientBuilder {
    api_version: ApiVersion,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    fn new(api_version: ApiVersion) -> Self {
        Self {
            api_version,
            base_url: DEFAULT_API_DOMAIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at a different base URL (e.g. a local stub server)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout applied by the HTTP transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the [`Client`]. Performs no network activity.
    pub fn build(self) -> Result<Client, Error> {
        let base_url = Url::parse(&self.base_url).map_err(|e| {
            Error::InvalidConfiguration(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                Error::InvalidConfiguration(format!("failed to build HTTP transport: {e}"))
            })?;

        Ok(Client {
            http,
            base_url,
            api_version: self.api_version,
            api_key: Arc::new(RwLock::new(String::new())),
        })
    }
}

impl Client {
    /// Create a client for the given API version with default configuration
    pub fn new(api_version: ApiVersion) -> Result<Self, Error> {
        Self::builder(api_version).build()
    }

    /// Create a builder for configuring a client
    pub fn builder(api_version: ApiVersion) -> ClientBuilder {
        ClientBuilder::new(api_version)
    }

    /// The API version requests are issued against
    pub fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Set the API token used for making requests to the API.
    ///
    /// Takes the exclusive write lock, so in-flight dispatches observe
    /// either the previous or the new token in full, never a mix.
    pub async fn set_api_token(&self, token: &str) -> Result<(), Error> {
        if token.is_empty() {
            return Err(Error::InvalidConfiguration("token is empty".to_string()));
        }

        let mut api_key = self.api_key.write().await;
        *api_key = token.to_string();

        Ok(())
    }

    /// Perform one HTTP round trip against the API.
    ///
    /// Builds the request from `path`, `method`, caller `headers`, `query`
    /// pairs and the optional JSON `body`, sends it, transparently inflates
    /// a gzip-encoded response body, and classifies the status: [200, 299]
    /// returns the body bytes and response headers, anything else becomes
    /// an [`Error`].
    ///
    /// # Errors
    /// - [`Error::MissingCredential`] before any I/O when no token is set
    /// - [`Error::UnsupportedMethod`] for verbs outside
    ///   GET/POST/PUT/PATCH/DELETE
    /// - [`Error::Encoding`] when the body cannot be serialized
    /// - [`Error::Transport`] when the request never produces a response
    /// - [`Error::Decoding`] when the body cannot be inflated, or a
    ///   non-success response carries an unreadable error payload
    /// - [`Error::RemoteApi`] for a non-success status with a parseable
    ///   error payload
    pub async fn dispatch<B>(
        &self,
        path: &str,
        method: Method,
        headers: HeaderMap,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(Vec<u8>, HeaderMap), Error>
    where
        B: Serialize + ?Sized,
    {
        // Snapshot the token under the shared read lock; fail fast before
        // touching the network.
        let token = self.api_key.read().await.clone();
        if token.is_empty() {
            return Err(Error::MissingCredential);
        }

        if !is_supported_method(&method) {
            return Err(Error::UnsupportedMethod(method.to_string()));
        }

        let mut url = self.base_url.clone();
        url.set_path(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let encoded_body = match body {
            Some(payload) => serde_json::to_vec(payload).map_err(Error::Encoding)?,
            None => Vec::new(),
        };

        let headers = assemble_headers(headers, &token, encoded_body.len())?;

        tracing::debug!(%method, %url, "dispatching request");

        let response = self
            .http
            .request(method, url)
            .headers(headers)
            .body(encoded_body)
            .send()
            .await
            .map_err(|source| Error::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let is_gzip = response_headers
            .get(CONTENT_ENCODING)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |encoding| encoding.contains("gzip"));

        let raw = response.bytes().await.map_err(|source| Error::Transport {
            path: path.to_string(),
            source,
        })?;

        let response_body = if is_gzip {
            let mut decoder = GzDecoder::new(raw.as_ref());
            let mut decompressed = Vec::new();
            decoder
                .read_to_end(&mut decompressed)
                .map_err(|e| Error::Decoding(format!("gzip response body: {e}")))?;
            decompressed
        } else {
            raw.to_vec()
        };

        tracing::debug!(
            status = status.as_u16(),
            bytes = response_body.len(),
            "received response"
        );

        if !status.is_success() {
            let payload: ErrorPayload =
                serde_json::from_slice(&response_body).map_err(|e| {
                    Error::Decoding(format!(
                        "status {} with unreadable error payload: {e}",
                        status.as_u16()
                    ))
                })?;
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                payload,
            });
        }

        Ok((response_body, response_headers))
    }
}

/// The verbs the dispatcher will send
fn is_supported_method(method: &Method) -> bool {
    matches!(
        method.as_str(),
        "GET" | "POST" | "PUT" | "PATCH" | "DELETE"
    )
}

/// Merge caller headers with the mandatory set.
///
/// Content-Length is recomputed from the encoded body and Content-Type and
/// the token header always take precedence; Connection, Accept-Encoding and
/// User-Agent are only filled in when the caller left them unset.
fn assemble_headers(
    caller: HeaderMap,
    token: &str,
    body_len: usize,
) -> Result<HeaderMap, Error> {
    let mut headers = caller;

    headers.insert(CONTENT_LENGTH, HeaderValue::from(body_len as u64));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let token_value = HeaderValue::from_str(token).map_err(|_| {
        Error::InvalidConfiguration("API token contains invalid header characters".to_string())
    })?;
    headers.insert(HeaderName::from_static(API_TOKEN_HEADER), token_value);

    headers
        .entry(CONNECTION)
        .or_insert(HeaderValue::from_static("keep-alive"));
    headers
        .entry(ACCEPT_ENCODING)
        .or_insert(HeaderValue::from_static("gzip"));
    headers
        .entry(USER_AGENT)
        .or_insert(HeaderValue::from_static(CLIENT_USER_AGENT));

    Ok(headers)
}
