//! Create and edit forms
//!
//! Both forms hold title and body as local editable state and submit one
//! atomic request. A failed submission records a visible error and yields
//! no navigation; the caller only sees server truth again by navigating
//! to a view that re-fetches.

use super::Navigation;
use crate::api::PostApi;
use crate::content::{normalize, PostDraft};

/// Local editable state shared by both forms
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub body: String,
}

impl PostForm {
    /// The server requires both fields; fail fast before issuing a request
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.body.trim().is_empty() {
            return Err("body must not be empty".to_string());
        }
        Ok(())
    }

    fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }
}

/// Collects title/body and creates a new post
#[derive(Default)]
pub struct CreateForm {
    form: PostForm,
    error: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.form.title = title.to_string();
    }

    pub fn set_body(&mut self, body: &str) {
        self.form.body = body.to_string();
    }

    /// The visible error from the last submission attempt, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. On success returns the collection route to
    /// navigate to; on failure records the error and returns `None`.
    pub async fn submit<A: PostApi>(&mut self, api: &A) -> Option<Navigation> {
        if let Err(message) = self.form.validate() {
            self.error = Some(message);
            return None;
        }

        match api.create_post(&self.form.draft()).await {
            Ok(created) => {
                tracing::info!("created post {}", created.id);
                self.error = None;
                Some(Navigation::Collection)
            }
            Err(err) => {
                tracing::warn!("create failed: {}", err);
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

/// Pre-populates title/body from the server, then updates the post
pub struct EditForm {
    id: i64,
    form: PostForm,
    error: Option<String>,
}

impl EditForm {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            form: PostForm::default(),
            error: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.form.title
    }

    pub fn body(&self) -> &str {
        &self.form.body
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the current record to pre-populate the fields. Editing a post
    /// the service does not have is reported as an error.
    pub async fn load<A: PostApi>(&mut self, api: &A) -> bool {
        match api.get_post(self.id).await {
            Ok(Some(remote)) => {
                let post = normalize(remote);
                self.form.title = post.title;
                self.form.body = post.body;
                true
            }
            Ok(None) => {
                self.error = Some(format!("post {} not found", self.id));
                false
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.form.title = title.to_string();
    }

    pub fn set_body(&mut self, body: &str) {
        self.form.body = body.to_string();
    }

    /// Submit the update. On success returns the detail route for this
    /// post; on failure records the error and returns `None`.
    pub async fn submit<A: PostApi>(&mut self, api: &A) -> Option<Navigation> {
        if let Err(message) = self.form.validate() {
            self.error = Some(message);
            return None;
        }

        match api.update_post(self.id, &self.form.draft()).await {
            Ok(updated) => {
                tracing::info!("updated post {}", updated.id);
                self.error = None;
                Some(Navigation::Detail(self.id))
            }
            Err(err) => {
                tracing::warn!("update failed: {}", err);
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
