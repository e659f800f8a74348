//! Case-insensitive substring search over server records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::ServerRecord;

/// A string attribute eligible for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Description,
    Owner,
    Discord,
    #[serde(rename = "youtube")]
    YouTube,
    Twitter,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::Name,
        SearchField::Description,
        SearchField::Owner,
        SearchField::Discord,
        SearchField::YouTube,
        SearchField::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Description => "description",
            SearchField::Owner => "owner",
            SearchField::Discord => "discord",
            SearchField::YouTube => "youtube",
            SearchField::Twitter => "twitter",
        }
    }

    /// The record's value for this field, if it has one.
    pub fn value_of<'a>(&self, record: &'a ServerRecord) -> Option<&'a str> {
        match self {
            SearchField::Name => record.server_name(),
            SearchField::Description => record.server_description(),
            SearchField::Owner => record.owner_name(),
            SearchField::Discord => record.social_links().and_then(|l| l.discord()),
            SearchField::YouTube => record.social_links().and_then(|l| l.youtube()),
            SearchField::Twitter => record.social_links().and_then(|l| l.x()),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ApiError::InvalidArgument(format!("Unknown search field: {s}")))
    }
}

/// Options for `ServerDirectoryClient::search`. An empty field list searches
/// all six fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub fields: Vec<SearchField>,
}

impl SearchOptions {
    pub fn fields(fields: impl IntoIterator<Item = SearchField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    fn effective_fields(&self) -> &[SearchField] {
        if self.fields.is_empty() {
            &SearchField::ALL
        } else {
            &self.fields
        }
    }
}

/// Lowercased query plus the fields it applies to.
#[derive(Debug)]
pub(crate) struct Matcher<'a> {
    needle: String,
    fields: &'a [SearchField],
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(query: &str, options: &'a SearchOptions) -> Self {
        Self {
            needle: query.to_lowercase(),
            fields: options.effective_fields(),
        }
    }

    pub(crate) fn matches(&self, record: &ServerRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.fields.iter().any(|field| {
            field
                .value_of(record)
                .is_some_and(|value| value.to_lowercase().contains(&self.needle))
        })
    }
}

/// Keep the records matching `query`. An empty query keeps everything.
pub fn search_records(records: Vec<ServerRecord>, query: &str, options: &SearchOptions) -> Vec<ServerRecord> {
    let matcher = Matcher::new(query, options);
    records.into_iter().filter(|r| matcher.matches(r)).collect()
}
