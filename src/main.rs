//! CLI entry point for blogr

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogr::views::OutputFormat;

#[derive(Parser)]
#[command(name = "blogr")]
#[command(version)]
#[command(about = "A terminal client for remote blog post APIs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Override the API base URL
    #[arg(short, long, global = true)]
    api_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts
    #[command(alias = "ls")]
    List,

    /// Show a single post
    Show {
        /// Post identifier
        id: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Show the most recent posts
    Recent,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Body text (reads stdin when neither this nor --body-file is given)
        #[arg(short, long)]
        body: Option<String>,

        /// Read the body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,
    },

    /// Edit an existing post
    Edit {
        /// Post identifier
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body text
        #[arg(short, long)]
        body: Option<String>,

        /// Read the new body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogr=debug,info"
    } else {
        "blogr=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::List => {
            let blog = blogr::Blog::new(&base_dir, cli.api_url.as_deref())?;
            tracing::debug!("listing posts from {}", blog.config.api_url);
            blogr::commands::list::run(&blog).await?;
        }

        Commands::Show { id, format } => {
            let blog = blogr::Blog::new(&base_dir, cli.api_url.as_deref())?;
            blogr::commands::show::run(&blog, id, format.into()).await?;
        }

        Commands::Recent => {
            let blog = blogr::Blog::new(&base_dir, cli.api_url.as_deref())?;
            blogr::commands::recent::run(&blog).await?;
        }

        Commands::New {
            title,
            body,
            body_file,
        } => {
            let blog = blogr::Blog::new(&base_dir, cli.api_url.as_deref())?;
            tracing::info!("creating post: {}", title);
            blogr::commands::new::run(&blog, &title, body, body_file).await?;
        }

        Commands::Edit {
            id,
            title,
            body,
            body_file,
        } => {
            let blog = blogr::Blog::new(&base_dir, cli.api_url.as_deref())?;
            tracing::info!("editing post {}", id);
            blogr::commands::edit::run(&blog, id, title, body, body_file).await?;
        }

        Commands::Version => {
            println!("blogr version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
