//! In-memory post service used by view tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ApiError, PostApi};
use crate::content::{PostDraft, RemotePost};

/// A `PostApi` backed by a vector, with per-operation failure switches and
/// a fetch counter for asserting how many cycles a view ran
#[derive(Default)]
pub struct FakeApi {
    posts: Mutex<Vec<RemotePost>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    fetches: AtomicUsize,
}

impl FakeApi {
    pub fn with_posts(posts: Vec<RemotePost>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// How many read requests the fake has served or rejected
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<RemotePost> {
        self.posts.lock().unwrap().clone()
    }

    fn error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "internal server error".to_string(),
        }
    }
}

/// Fixture record with a creation date derived from the id
pub fn post(id: i64, title: &str) -> RemotePost {
    RemotePost {
        id,
        title: title.to_string(),
        body: format!("Body of {}", title),
        created_at: format!("2024-01-{:02}T10:00:00Z", id),
        updated_at: None,
    }
}

impl PostApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<RemotePost>, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Self::error());
        }
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn get_post(&self, id: i64) -> Result<Option<RemotePost>, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Self::error());
        }
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<RemotePost, ApiError> {
        if self.fail_writes {
            return Err(Self::error());
        }
        let mut posts = self.posts.lock().unwrap();
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = RemotePost {
            id,
            title: draft.title.clone(),
            body: draft.body.clone(),
            created_at: format!("2024-02-{:02}T10:00:00Z", id),
            updated_at: None,
        };
        posts.push(created.clone());
        Ok(created)
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<RemotePost, ApiError> {
        if self.fail_writes {
            return Err(Self::error());
        }
        let mut posts = self.posts.lock().unwrap();
        let Some(existing) = posts.iter_mut().find(|p| p.id == id) else {
            return Err(ApiError::Status {
                status: 404,
                message: "post not found".to_string(),
            });
        };
        existing.title = draft.title.clone();
        existing.body = draft.body.clone();
        existing.updated_at = Some("2024-03-01T10:00:00Z".to_string());
        Ok(existing.clone())
    }
}
