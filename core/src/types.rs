//! Domain DTOs for the server directory.
//!
//! # Design
//! These types mirror the upstream schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Only the id
//! and the player counts are required. Text fields and social links are
//! `Nullable`, so a missing key and an explicit `null` are both accepted and
//! written back the way they arrived. Fields the client never reads are kept
//! in `extra`, which makes a record round-trip unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `None`: key absent. `Some(None)`: key present with `null`.
pub type Nullable<T> = Option<Option<T>>;

fn present<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn flatten_str(value: &Nullable<String>) -> Option<&str> {
    value.as_ref().and_then(|v| v.as_deref())
}

/// One server's status snapshot as returned by upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    pub private_server_id: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub server_name: Nullable<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub server_description: Nullable<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub owner_name: Nullable<String>,
    pub current_players: u32,
    pub max_players: u32,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub social_links: Nullable<SocialLinks>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerRecord {
    /// No free slots left. Upstream data with more players than slots also
    /// counts as full.
    pub fn is_full(&self) -> bool {
        self.current_players >= self.max_players
    }

    pub fn server_name(&self) -> Option<&str> {
        flatten_str(&self.server_name)
    }

    pub fn server_description(&self) -> Option<&str> {
        flatten_str(&self.server_description)
    }

    pub fn owner_name(&self) -> Option<&str> {
        flatten_str(&self.owner_name)
    }

    pub fn social_links(&self) -> Option<&SocialLinks> {
        self.social_links.as_ref().and_then(|v| v.as_ref())
    }
}

/// Social links advertised by a server owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(
        rename = "Discord",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub discord: Nullable<String>,
    #[serde(
        rename = "YouTube",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub youtube: Nullable<String>,
    #[serde(rename = "X", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub x: Nullable<String>,
}

impl SocialLinks {
    pub fn discord(&self) -> Option<&str> {
        flatten_str(&self.discord)
    }

    pub fn youtube(&self) -> Option<&str> {
        flatten_str(&self.youtube)
    }

    pub fn x(&self) -> Option<&str> {
        flatten_str(&self.x)
    }
}

/// Options for `ServerDirectoryClient::fetch_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Keep servers with no free slots. Defaults to `true`.
    pub include_full: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { include_full: true }
    }
}

impl FetchOptions {
    pub fn available_only() -> Self {
        Self {
            include_full: false,
        }
    }
}
