//! Post collection view

use super::{Navigation, ViewState};
use crate::api::PostApi;
use crate::content::{normalize, Post};

/// Renders the full post collection, one entry per post
pub struct ListView {
    state: ViewState<Vec<Post>>,
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    /// Run one fetch cycle against the service
    pub async fn fetch<A: PostApi>(&mut self, api: &A) {
        match api.list_posts().await {
            Ok(posts) => {
                self.state = ViewState::Loaded(posts.into_iter().map(normalize).collect());
            }
            Err(err) => {
                tracing::warn!("failed to load posts: {}", err);
                self.state = ViewState::Error(err.to_string());
            }
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Post>> {
        &self.state
    }

    /// Terminal rendering: an indicator while loading, the message on
    /// error, otherwise one line per post linking to its detail route
    pub fn render(&self, date_format: &str) -> String {
        match &self.state {
            ViewState::Loading => "Loading...\n".to_string(),
            ViewState::Error(message) => format!("Error: {}\n", message),
            ViewState::Loaded(posts) => {
                let mut out = format!("Blog Posts ({}):\n", posts.len());
                for post in posts {
                    out.push_str(&format!(
                        "  {} - {} [{}]\n",
                        post.created_at.format(date_format),
                        post.title,
                        Navigation::Detail(post.id).route()
                    ));
                }
                out
            }
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{post, FakeApi};

    #[tokio::test]
    async fn test_starts_loading() {
        let view = ListView::new();
        assert!(view.state().is_loading());
        assert_eq!(view.render("YYYY-MM-DD"), "Loading...\n");
    }

    #[tokio::test]
    async fn test_renders_one_entry_per_post() {
        let api = FakeApi::with_posts(vec![post(1, "First"), post(2, "Second")]);
        let mut view = ListView::new();
        view.fetch(&api).await;

        let out = view.render("YYYY-MM-DD");
        assert!(out.contains("Blog Posts (2):"));
        assert!(out.contains("First [/post/1]"));
        assert!(out.contains("Second [/post/2]"));
        assert!(out.contains("2024-01-01"));
    }

    #[tokio::test]
    async fn test_fetch_failure_moves_to_error() {
        let api = FakeApi::failing();
        let mut view = ListView::new();
        view.fetch(&api).await;

        let message = view.state().error().expect("should be an error");
        assert!(message.contains("500"));
        assert!(view.render("YYYY-MM-DD").starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_empty_collection_renders_empty_list() {
        let api = FakeApi::with_posts(Vec::new());
        let mut view = ListView::new();
        view.fetch(&api).await;
        assert_eq!(view.render("YYYY-MM-DD"), "Blog Posts (0):\n");
    }
}
