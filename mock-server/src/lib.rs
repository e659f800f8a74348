use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(rename = "Discord", default)]
    pub discord: Option<String>,
    #[serde(rename = "YouTube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "X", default)]
    pub x: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub private_server_id: String,
    pub server_name: String,
    pub server_description: String,
    pub owner_name: String,
    pub current_players: u32,
    pub max_players: u32,
    #[serde(default)]
    pub social_links: SocialLinks,
}

pub type Db = Arc<RwLock<Vec<Server>>>;

/// Servers bundled with the binary for local runs.
pub fn fixture() -> Vec<Server> {
    serde_json::from_str(include_str!("../fixtures/servers.json")).expect("bundled fixture is valid")
}

pub fn app(servers: Vec<Server>) -> Router {
    let db: Db = Arc::new(RwLock::new(servers));
    Router::new()
        .route("/servers", get(list_servers).put(replace_servers))
        .with_state(db)
}

pub async fn run(listener: TcpListener, servers: Vec<Server>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(servers)).await
}

/// Answers only requests carrying `Content-Type: application/json`.
async fn list_servers(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Vec<Server>>, StatusCode> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if !is_json {
        return Err(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
    let servers = db.read().await;
    Ok(Json(servers.clone()))
}

async fn replace_servers(State(db): State<Db>, Json(input): Json<Vec<Server>>) -> StatusCode {
    info!("replacing server list with {} entries", input.len());
    *db.write().await = input;
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_not_empty() {
        let servers = fixture();
        assert_eq!(servers.len(), 4);
        assert!(servers.iter().any(|s| s.current_players == s.max_players));
    }

    #[test]
    fn server_serializes_with_upstream_names() {
        let server = Server {
            private_server_id: "id-1".to_string(),
            server_name: "Test".to_string(),
            server_description: "Desc".to_string(),
            owner_name: "Owner".to_string(),
            current_players: 3,
            max_players: 10,
            social_links: SocialLinks {
                discord: Some("discord.gg/test".to_string()),
                youtube: None,
                x: None,
            },
        };
        let json = serde_json::to_value(&server).unwrap();
        assert_eq!(json["privateServerId"], "id-1");
        assert_eq!(json["serverName"], "Test");
        assert_eq!(json["currentPlayers"], 3);
        assert_eq!(json["maxPlayers"], 10);
        assert_eq!(json["socialLinks"]["Discord"], "discord.gg/test");
        assert!(json["socialLinks"]["YouTube"].is_null());
    }

    #[test]
    fn social_links_default_when_missing() {
        let server: Server = serde_json::from_str(
            r#"{"privateServerId":"x","serverName":"n","serverDescription":"","ownerName":"o","currentPlayers":0,"maxPlayers":1}"#,
        )
        .unwrap();
        assert!(server.social_links.discord.is_none());
        assert!(server.social_links.x.is_none());
    }

    #[test]
    fn server_rejects_missing_id() {
        let result: Result<Server, _> = serde_json::from_str(
            r#"{"serverName":"n","serverDescription":"","ownerName":"o","currentPlayers":0,"maxPlayers":1}"#,
        );
        assert!(result.is_err());
    }
}
