// Formdesk API - Core Library
//
// Data records mirroring the JSON shapes of the Formdesk HTTP API.
// This crate performs no I/O; the api-client crate builds on top of it.

pub mod models;
pub mod timestamp;

pub use models::*;
pub use timestamp::*;
