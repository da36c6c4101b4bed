//! Edit an existing post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::views::{DetailView, EditForm, OutputFormat, ViewState};
use crate::Blog;

/// Pre-populate the edit form from the server, apply the given field
/// overrides, submit the update, then navigate to the detail view
/// (which re-fetches) on success
pub async fn run(
    blog: &Blog,
    id: i64,
    title: Option<String>,
    body: Option<String>,
    body_file: Option<PathBuf>,
) -> Result<()> {
    let api = blog.api();
    let mut form = EditForm::new(id);

    if !form.load(&api).await {
        anyhow::bail!(
            "cannot edit post {}: {}",
            id,
            form.error().unwrap_or("unknown error")
        );
    }

    if let Some(title) = title {
        form.set_title(&title);
    }
    if let Some(text) = body {
        form.set_body(&text);
    } else if let Some(path) = body_file {
        form.set_body(&fs::read_to_string(path)?);
    }

    let Some(destination) = form.submit(&api).await else {
        anyhow::bail!(
            "update failed: {}",
            form.error().unwrap_or("unknown error")
        );
    };

    println!("Updated post -> {}", destination.route());

    let mut view = DetailView::new(id);
    view.fetch(&api).await;
    if let ViewState::Error(message) = view.state() {
        anyhow::bail!("failed to reload post {}: {}", id, message);
    }
    let renderer = blog.renderer();
    print!(
        "{}",
        view.render(&renderer, &blog.config.date_format, OutputFormat::Text)
    );
    Ok(())
}
