//! Server directory client.
//!
//! # Design
//! `ServerDirectoryClient` holds only its base URL and a `Transport`; it keeps
//! no copy of the data between calls. Listing is split into
//! `build_list_servers` and `parse_list_servers` so a host can run the
//! round-trip itself. Every query goes through `fetch_all`, which means every
//! call re-fetches the whole list, then applies one of the views in
//! `crate::query`.

use log::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::query;
use crate::search::{search_records, SearchOptions};
use crate::transport::UreqTransport;
use crate::types::{FetchOptions, ServerRecord};

/// Read-only client for the upstream `/servers` endpoint.
#[derive(Debug, Clone)]
pub struct ServerDirectoryClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl ServerDirectoryClient<UreqTransport> {
    /// Client for `base_url` using the default blocking transport.
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new(config))
    }
}

impl Default for ServerDirectoryClient<UreqTransport> {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl<T: Transport> ServerDirectoryClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.normalized_base_url().to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_servers(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/servers", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_list_servers(&self, response: HttpResponse) -> Result<Vec<ServerRecord>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Every server upstream knows about, optionally without full ones.
    pub fn fetch_all(&self, options: FetchOptions) -> Result<Vec<ServerRecord>, ApiError> {
        let request = self.build_list_servers();
        let response = self.transport.execute(&request).map_err(|e| ApiError::Upstream {
            operation: Operation::GetServers,
            message: e.0,
        });
        let servers = response
            .and_then(|response| self.parse_list_servers(response))
            .inspect_err(|e| warn!("{} failed: {e}", request.path))?;
        debug!("fetched {} servers", servers.len());

        if options.include_full {
            Ok(servers)
        } else {
            Ok(query::filter_available(servers))
        }
    }

    /// The server whose `privateServerId` equals `id`.
    pub fn fetch_by_id(&self, id: &str) -> Result<ServerRecord, ApiError> {
        self.fetch_for(Operation::GetServer)?
            .into_iter()
            .find(|s| s.private_server_id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    /// The `limit` busiest servers, busiest first. `limit` must be within
    /// `1..=100`; use `query::DEFAULT_TOP_LIMIT` for the usual ten.
    pub fn fetch_top(&self, limit: usize) -> Result<Vec<ServerRecord>, ApiError> {
        query::validate_top_limit(limit)?;
        let servers = self.fetch_for(Operation::GetTopServers)?;
        query::top_by_players(servers, limit)
    }

    pub fn fetch_by_player_count(&self, count: i64) -> Result<Vec<ServerRecord>, ApiError> {
        let servers = self.fetch_for(Operation::GetServersByPlayerCount)?;
        Ok(query::with_player_count(servers, count))
    }

    pub fn fetch_above_player_count(&self, count: i64) -> Result<Vec<ServerRecord>, ApiError> {
        let servers = self.fetch_for(Operation::GetServersAbovePlayerCount)?;
        Ok(query::above_player_count(servers, count))
    }

    pub fn fetch_below_player_count(&self, count: i64) -> Result<Vec<ServerRecord>, ApiError> {
        let servers = self.fetch_for(Operation::GetServersBelowPlayerCount)?;
        Ok(query::below_player_count(servers, count))
    }

    /// Case-insensitive substring search. An empty `query` returns every
    /// server.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<ServerRecord>, ApiError> {
        let servers = self.fetch_for(Operation::SearchServers)?;
        Ok(search_records(servers, query, options))
    }

    fn fetch_for(&self, operation: Operation) -> Result<Vec<ServerRecord>, ApiError> {
        self.fetch_all(FetchOptions::default())
            .map_err(|e| e.within(operation))
    }
}

/// Map a non-2xx status to `ApiError::Upstream`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Upstream {
        operation: Operation::GetServers,
        message: format!("Request failed with status code {}", response.status),
    })
}
