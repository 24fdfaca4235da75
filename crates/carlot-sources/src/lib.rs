//! carlot-sources — network and storage collaborators for carlot.
//!
//! Everything the core pipeline treats as an external collaborator lives
//! here: the third-party car-data API, the document store, the auth
//! provider, and the file-backed session and cart caches. Each adapter sits
//! behind a trait (or a plain store object) so the pipeline and tests can
//! swap in fakes.

pub mod auth;
pub mod carapi;
pub mod cart;
pub mod client;
pub mod docstore;
pub mod session;

pub use carapi::{CarApi, CarDataSource};
pub use client::{HttpClient, Payload};
pub use docstore::{Document, DocumentStore, HttpDocumentStore, MemoryStore};

/// Failures raised by the source adapters.
///
/// These are transport-level problems only; a response that arrives but is
/// not JSON is NOT an error here (it degrades to [`Payload::Text`] and
/// surfaces downstream as an empty extraction).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("building request: {0}")]
    Request(#[from] hyper::http::Error),
    #[error("http transport: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    #[error("reading response body: {0}")]
    Body(#[from] hyper::Error),
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: hyper::StatusCode,
    },
    #[error("document store: {0}")]
    Store(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
