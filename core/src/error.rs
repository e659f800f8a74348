//! Error types for the server directory client.
//!
//! # Design
//! Callers discriminate on the variant, never on the message. `Upstream`
//! covers everything the transport or the upstream status reports and is
//! tagged with the public operation that was running; the other variants are
//! raised locally and pass through every operation untouched.

use std::fmt;

use thiserror::Error;

/// Public operation a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetServers,
    GetServer,
    GetTopServers,
    GetServersByPlayerCount,
    GetServersAbovePlayerCount,
    GetServersBelowPlayerCount,
    SearchServers,
}

impl Operation {
    pub fn description(&self) -> &'static str {
        match self {
            Operation::GetServers => "get servers",
            Operation::GetServer => "get server information",
            Operation::GetTopServers => "get top servers",
            Operation::GetServersByPlayerCount => "get servers by player count",
            Operation::GetServersAbovePlayerCount => "get servers above player count",
            Operation::GetServersBelowPlayerCount => "get servers below player count",
            Operation::SearchServers => "search servers",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Errors returned by `ServerDirectoryClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure or non-2xx status while fetching `/servers`.
    #[error("Failed to {operation}: {message}")]
    Upstream { operation: Operation, message: String },

    /// No record carries the requested `privateServerId`.
    #[error("Server not found: {0}")]
    NotFound(String),

    /// An argument was rejected before any request was made.
    #[error("{0}")]
    InvalidArgument(String),

    /// The upstream answered 2xx but the body is not a list of servers.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Re-attribute an upstream failure to `operation`. Other variants are
    /// returned as they are.
    pub fn within(self, operation: Operation) -> Self {
        match self {
            ApiError::Upstream { message, .. } => ApiError::Upstream { operation, message },
            other => other,
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, ApiError::Upstream { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(message: &str) -> ApiError {
        ApiError::Upstream {
            operation: Operation::GetServers,
            message: message.to_string(),
        }
    }

    #[test]
    fn upstream_message_names_the_operation() {
        let err = upstream("Request failed with status code 503");
        assert_eq!(
            err.to_string(),
            "Failed to get servers: Request failed with status code 503"
        );
    }

    #[test]
    fn within_rewraps_upstream_only() {
        let err = upstream("connection refused").within(Operation::GetTopServers);
        assert_eq!(err.to_string(), "Failed to get top servers: connection refused");

        let err = ApiError::NotFound("abc".to_string()).within(Operation::GetServer);
        assert_eq!(err, ApiError::NotFound("abc".to_string()));

        let err = ApiError::InvalidArgument("bad".to_string()).within(Operation::GetTopServers);
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn every_operation_has_a_description() {
        let ops = [
            (Operation::GetServer, "get server information"),
            (Operation::GetServersByPlayerCount, "get servers by player count"),
            (Operation::GetServersAbovePlayerCount, "get servers above player count"),
            (Operation::GetServersBelowPlayerCount, "get servers below player count"),
            (Operation::SearchServers, "search servers"),
        ];
        for (op, text) in ops {
            assert_eq!(op.to_string(), text);
        }
    }

    #[test]
    fn not_found_mentions_the_id() {
        let err = ApiError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Server not found: abc");
        assert!(!err.is_upstream());
    }
}
