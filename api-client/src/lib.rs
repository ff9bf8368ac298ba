// API client library for the Formdesk forms service
//
// This crate provides the typed HTTP client for the Formdesk API:
// a `Client` holding shared configuration, a request dispatcher that
// performs one round trip per call, and a method-per-endpoint surface
// over the records defined in formdesk-core.

pub mod client;
pub mod endpoints;
pub mod errors;

// Re-export commonly used items
pub use client::{Client, ClientBuilder, API_TOKEN_HEADER, CLIENT_USER_AGENT, DEFAULT_API_DOMAIN};
pub use errors::Error;

// The endpoint surface returns these directly; spare callers a second import.
pub use formdesk_core::{
    ApiVersion, BaseInfo, Choice, Colors, Design, DesignInfo, ErrorPayload, Field, FieldType,
    Form, FormInfo, FormUrl, ImageInfo, Labels, Link, LogicJump, NewImage, Timestamp, UrlInfo,
};
