//! Show the recent posts sidebar

use anyhow::Result;

use crate::views::{SidebarView, ViewState};
use crate::Blog;

pub async fn run(blog: &Blog) -> Result<()> {
    let api = blog.api();
    let mut view = SidebarView::new(blog.config.recent_posts);
    view.fetch(&api).await;

    if let ViewState::Error(message) = view.state() {
        anyhow::bail!("failed to load recent posts: {}", message);
    }

    print!("{}", view.render());
    Ok(())
}
