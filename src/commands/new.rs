//! Create a new post

use anyhow::Result;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::views::{CreateForm, ListView};
use crate::Blog;

/// Create a post from the given title and body, then navigate to the
/// collection view (which re-fetches) on success
pub async fn run(
    blog: &Blog,
    title: &str,
    body: Option<String>,
    body_file: Option<PathBuf>,
) -> Result<()> {
    let body = read_body(body, body_file.as_deref())?;

    let api = blog.api();
    let mut form = CreateForm::new();
    form.set_title(title);
    form.set_body(&body);

    let Some(destination) = form.submit(&api).await else {
        anyhow::bail!(
            "create failed: {}",
            form.error().unwrap_or("unknown error")
        );
    };

    println!("Created post -> {}", destination.route());

    let mut view = ListView::new();
    view.fetch(&api).await;
    print!("{}", view.render(&blog.config.date_format));
    Ok(())
}

/// Body text from the flag, a file, or stdin (in that order)
pub fn read_body(body: Option<String>, body_file: Option<&Path>) -> Result<String> {
    if let Some(text) = body {
        return Ok(text);
    }
    if let Some(path) = body_file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
