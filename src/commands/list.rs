//! List all posts

use anyhow::Result;

use crate::views::{ListView, ViewState};
use crate::Blog;

/// Mount the list view, fetch the collection and print it
pub async fn run(blog: &Blog) -> Result<()> {
    let api = blog.api();
    let mut view = ListView::new();
    view.fetch(&api).await;

    if let ViewState::Error(message) = view.state() {
        anyhow::bail!("failed to load posts: {}", message);
    }

    print!("{}", view.render(&blog.config.date_format));
    Ok(())
}
