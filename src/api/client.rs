//! reqwest-based post service client

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, PostApi};
use crate::content::{PostDraft, RemotePost};

/// Envelope of the collection endpoint
#[derive(Debug, Deserialize)]
struct PostsEnvelope {
    posts: Vec<RemotePost>,
}

/// Envelope of the single-post endpoints. The create response additionally
/// carries `message`/`status` fields, which are ignored here.
#[derive(Debug, Deserialize)]
struct PostEnvelope {
    post: RemotePost,
}

/// Error body the server attaches to non-success responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the remote post service
///
/// The base URL is injected at construction; there is no ambient
/// configuration.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    http: Client,
}

impl HttpApi {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Convert a non-success response into a status error, folding in the
    /// server's `{"error": ...}` body when it sent one
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl PostApi for HttpApi {
    async fn list_posts(&self) -> Result<Vec<RemotePost>, ApiError> {
        let url = self.endpoint("posts");
        tracing::debug!("GET {}", url);

        let response = Self::check(self.http.get(&url).send().await?).await?;
        let envelope: PostsEnvelope = Self::decode(response).await?;
        Ok(envelope.posts)
    }

    async fn get_post(&self, id: i64) -> Result<Option<RemotePost>, ApiError> {
        let url = self.endpoint(&format!("posts/{}", id));
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(response).await?;
        let envelope: PostEnvelope = Self::decode(response).await?;
        Ok(Some(envelope.post))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<RemotePost, ApiError> {
        let url = self.endpoint("posts");
        tracing::debug!("POST {}", url);

        let response = Self::check(self.http.post(&url).json(draft).send().await?).await?;
        let envelope: PostEnvelope = Self::decode(response).await?;
        Ok(envelope.post)
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<RemotePost, ApiError> {
        let url = self.endpoint(&format!("posts/{}", id));
        tracing::debug!("PUT {}", url);

        let response = Self::check(self.http.put(&url).json(draft).send().await?).await?;
        let envelope: PostEnvelope = Self::decode(response).await?;
        Ok(envelope.post)
    }
}
