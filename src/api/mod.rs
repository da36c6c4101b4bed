//! Remote post service client
//!
//! The remote API owns persistence; this module defines the operations it
//! exposes, the failure taxonomy at the fetch boundary, and the
//! reqwest-based implementation.

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::HttpApi;

use thiserror::Error;

use crate::content::{PostDraft, RemotePost};

/// Failures at the fetch boundary
///
/// "Not found" is deliberately absent: a missing post is a designed state
/// the caller renders, not an error.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Operations the remote post service exposes
#[allow(async_fn_in_trait)]
pub trait PostApi {
    /// Fetch the full post collection
    async fn list_posts(&self) -> Result<Vec<RemotePost>, ApiError>;

    /// Fetch one post; `None` when the service has no record for the id
    async fn get_post(&self, id: i64) -> Result<Option<RemotePost>, ApiError>;

    /// Create a post; the server assigns the identifier
    async fn create_post(&self, draft: &PostDraft) -> Result<RemotePost, ApiError>;

    /// Replace an existing post's title and body
    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<RemotePost, ApiError>;
}
