//! Post models and normalization

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::helpers::format_date;

/// A post as the remote API returns it (snake_case JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePost {
    /// Server-assigned identifier
    pub id: i64,

    /// Post title
    pub title: String,

    /// Post body (Markdown or raw HTML depending on deployment)
    pub body: String,

    /// Creation timestamp, ISO-8601
    pub created_at: String,

    /// Last update timestamp, ISO-8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The `{title, body}` payload for create and update requests
#[derive(Debug, Clone, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

/// A timestamp from the API: parsed when the server sent valid RFC 3339,
/// otherwise the raw string is retained for display
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Parsed(DateTime<FixedOffset>),
    Raw(String),
}

impl Timestamp {
    pub fn parse(value: &str) -> Self {
        match DateTime::parse_from_rfc3339(value) {
            Ok(date) => Timestamp::Parsed(date),
            Err(_) => Timestamp::Raw(value.to_string()),
        }
    }

    /// The parsed date, when there is one
    pub fn as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Timestamp::Parsed(date) => Some(date),
            Timestamp::Raw(_) => None,
        }
    }

    /// Format with a Moment.js-style format string; raw values pass through
    pub fn format(&self, format: &str) -> String {
        match self {
            Timestamp::Parsed(date) => format_date(date, format),
            Timestamp::Raw(value) => value.clone(),
        }
    }
}

/// The in-memory post a view renders from
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Identifier, always equal to the remote record's id
    pub id: i64,

    /// Post title
    pub title: String,

    /// Post body, untransformed (rendering is a presentation decision)
    pub body: String,

    /// Creation timestamp
    pub created_at: Timestamp,

    /// Last update timestamp
    pub updated_at: Option<Timestamp>,
}

/// Map a raw API record into the representation views work with.
///
/// Pure and deterministic. A missing `updated_at` stays absent, and body
/// content passes through untouched.
pub fn normalize(remote: RemotePost) -> Post {
    Post {
        id: remote.id,
        title: remote.title,
        body: remote.body,
        created_at: Timestamp::parse(&remote.created_at),
        updated_at: remote.updated_at.as_deref().map(Timestamp::parse),
    }
}
