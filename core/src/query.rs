//! In-memory views over a fetched server list.
//!
//! These are the transformations behind every `ServerDirectoryClient` query,
//! exposed so a host that does its own I/O gets identical results from
//! `parse_list_servers` output.

use crate::error::ApiError;
use crate::types::ServerRecord;

pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const MAX_TOP_LIMIT: usize = 100;

/// Drop servers with no free slot.
pub fn filter_available(records: Vec<ServerRecord>) -> Vec<ServerRecord> {
    records.into_iter().filter(|r| !r.is_full()).collect()
}

/// Reject a top-list limit outside `1..=MAX_TOP_LIMIT`.
pub fn validate_top_limit(limit: usize) -> Result<(), ApiError> {
    if (1..=MAX_TOP_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(ApiError::InvalidArgument(format!(
            "Limit must be between 1 and {MAX_TOP_LIMIT}"
        )))
    }
}

/// The `limit` most populated servers, busiest first. Order among servers
/// with equal player counts is unspecified.
pub fn top_by_players(mut records: Vec<ServerRecord>, limit: usize) -> Result<Vec<ServerRecord>, ApiError> {
    validate_top_limit(limit)?;
    records.sort_by(|a, b| b.current_players.cmp(&a.current_players));
    records.truncate(limit);
    Ok(records)
}

pub fn with_player_count(records: Vec<ServerRecord>, count: i64) -> Vec<ServerRecord> {
    records.into_iter().filter(|r| players(r) == count).collect()
}

pub fn above_player_count(records: Vec<ServerRecord>, count: i64) -> Vec<ServerRecord> {
    records.into_iter().filter(|r| players(r) > count).collect()
}

pub fn below_player_count(records: Vec<ServerRecord>, count: i64) -> Vec<ServerRecord> {
    records.into_iter().filter(|r| players(r) < count).collect()
}

fn players(record: &ServerRecord) -> i64 {
    i64::from(record.current_players)
}
