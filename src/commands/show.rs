//! Show a single post

use anyhow::Result;

use crate::views::{DetailView, OutputFormat, ViewState};
use crate::Blog;

/// Mount the detail view for `id` and print it. A post the service does
/// not have renders the not-found message; only fetch failures abort.
pub async fn run(blog: &Blog, id: i64, format: OutputFormat) -> Result<()> {
    let api = blog.api();
    let mut view = DetailView::new(id);
    view.fetch(&api).await;

    if let ViewState::Error(message) = view.state() {
        anyhow::bail!("failed to load post {}: {}", id, message);
    }

    let renderer = blog.renderer();
    print!(
        "{}",
        view.render(&renderer, &blog.config.date_format, format)
    );
    Ok(())
}
