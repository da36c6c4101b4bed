//! Single post view

use super::{Navigation, ViewState};
use crate::api::PostApi;
use crate::content::{normalize, BodyRenderer, Post};
use crate::helpers::strip_html;

/// Outcome of a successful detail fetch: the service either has the post
/// or answers that no such record exists
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Found(Post),
    NotFound,
}

/// How the rendered view is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain terminal text, markup stripped
    Text,
    /// The rendered markup itself
    Html,
}

/// Renders one post, parameterized by its identifier
pub struct DetailView {
    id: i64,
    state: ViewState<DetailState>,
}

impl DetailView {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: ViewState::Loading,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Point the view at another post. Resets the state machine so the
    /// next fetch cycle cannot reuse stale data from the previous id.
    pub fn set_id(&mut self, id: i64) {
        if self.id != id {
            self.id = id;
            self.state = ViewState::Loading;
        }
    }

    /// Run one fetch cycle for the current id
    pub async fn fetch<A: PostApi>(&mut self, api: &A) {
        match api.get_post(self.id).await {
            Ok(Some(remote)) => {
                self.state = ViewState::Loaded(DetailState::Found(normalize(remote)));
            }
            Ok(None) => {
                self.state = ViewState::Loaded(DetailState::NotFound);
            }
            Err(err) => {
                tracing::warn!("failed to load post {}: {}", self.id, err);
                self.state = ViewState::Error(err.to_string());
            }
        }
    }

    pub fn state(&self) -> &ViewState<DetailState> {
        &self.state
    }

    /// Render per the view contract: indicator, error message, not-found
    /// message, or the post with title, dates, body and edit link
    pub fn render(&self, renderer: &BodyRenderer, date_format: &str, format: OutputFormat) -> String {
        match &self.state {
            ViewState::Loading => "Loading...\n".to_string(),
            ViewState::Error(message) => format!("Error: {}\n", message),
            ViewState::Loaded(DetailState::NotFound) => "Post not found.\n".to_string(),
            ViewState::Loaded(DetailState::Found(post)) => {
                let body = renderer.render(&post.body);
                match format {
                    OutputFormat::Html => self.render_html(post, &body, date_format),
                    OutputFormat::Text => self.render_text(post, &body, date_format),
                }
            }
        }
    }

    fn render_text(&self, post: &Post, body: &str, date_format: &str) -> String {
        let mut out = format!(
            "{}\nCreated at: {}\n",
            post.title,
            post.created_at.format(date_format)
        );
        if let Some(updated) = &post.updated_at {
            out.push_str(&format!("Updated at: {}\n", updated.format(date_format)));
        }
        out.push('\n');
        out.push_str(strip_html(body).trim_end());
        out.push_str(&format!("\n\nEdit: {}\n", Navigation::Edit(post.id).route()));
        out
    }

    fn render_html(&self, post: &Post, body: &str, date_format: &str) -> String {
        format!(
            "<h1>{}</h1>\n<p>Created at: {}</p>\n<div>{}</div>\n<a href=\"{}\">Edit Post</a>\n",
            crate::helpers::html_escape(&post.title),
            post.created_at.format(date_format),
            body,
            Navigation::Edit(post.id).route()
        )
    }
}
