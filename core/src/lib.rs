//! Client for a public game-server directory.
//!
//! # Overview
//! Wraps the upstream `GET /servers` endpoint and derives read-only views
//! from the returned list: all servers, one server by id, the busiest
//! servers, player-count filters and a case-insensitive text search.
//!
//! # Design
//! - `ServerDirectoryClient` is stateless apart from its base URL and
//!   transport. Nothing is cached; each query re-fetches the list.
//! - Listing is split into `build_list_servers` (produces request) and
//!   `parse_list_servers` (consumes response); `Transport` executes the
//!   round-trip in between. `UreqTransport` is the default.
//! - The in-memory views live in `query` and `search` so hosts doing their
//!   own I/O get the same semantics.
//! - `ApiError` distinguishes upstream failures from local ones by variant.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod search;
pub mod transport;
pub mod types;

pub use client::ServerDirectoryClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use query::{DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT};
pub use search::{SearchField, SearchOptions};
pub use transport::UreqTransport;
pub use types::{FetchOptions, Nullable, ServerRecord, SocialLinks};
