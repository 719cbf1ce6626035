//! HTTP client for the platform REST API: typed payloads, the request
//! client, the task-spawning manager, and upload constraints.

pub mod client;
pub mod manager;
pub mod types;
pub mod upload;

pub use client::ApiClient;
pub use manager::ApiManager;

use thiserror::Error;

/// Everything that can go wrong between issuing a request and having a typed
/// payload in hand. `Api` wraps the server's own `error` string so messages
/// shown to the user contain it verbatim.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned HTTP {0}")]
    Http(u16),
    #[error("not authenticated")]
    Unauthorized,
    #[error("{0}")]
    Api(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Io(String),
}
