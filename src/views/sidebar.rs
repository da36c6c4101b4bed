//! Recent posts sidebar

use super::{Navigation, ViewState};
use crate::api::PostApi;
use crate::content::{normalize, Post};
use crate::helpers::truncate;

/// Title display width in the sidebar
const TITLE_WIDTH: usize = 60;

/// Derives a bounded recent-posts subset from the full collection.
/// Read-only; never mutates.
pub struct SidebarView {
    limit: usize,
    state: ViewState<Vec<Post>>,
}

impl SidebarView {
    /// Create a sidebar showing at most `limit` posts
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            state: ViewState::Loading,
        }
    }

    /// Fetch the collection and keep the `limit` most recent posts.
    /// The API does not guarantee chronological collection order, so the
    /// derivation sorts by creation timestamp explicitly; entries without
    /// a parseable timestamp sort last, in collection order.
    pub async fn fetch<A: PostApi>(&mut self, api: &A) {
        match api.list_posts().await {
            Ok(posts) => {
                let mut posts: Vec<Post> = posts.into_iter().map(normalize).collect();
                posts.sort_by(|a, b| b.created_at.as_date().cmp(&a.created_at.as_date()));
                posts.truncate(self.limit);
                self.state = ViewState::Loaded(posts);
            }
            Err(err) => {
                tracing::warn!("failed to load recent posts: {}", err);
                self.state = ViewState::Error(err.to_string());
            }
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Post>> {
        &self.state
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => "Loading...\n".to_string(),
            ViewState::Error(message) => format!("Error: {}\n", message),
            ViewState::Loaded(posts) => {
                let mut out = "Recent Posts:\n".to_string();
                for post in posts {
                    out.push_str(&format!(
                        "  {} [{}]\n",
                        truncate(&post.title, TITLE_WIDTH),
                        Navigation::Detail(post.id).route()
                    ));
                }
                out
            }
        }
    }
}
