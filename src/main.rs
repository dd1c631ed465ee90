//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version = "0.1.0")]
#[command(about = "A portfolio and blog content engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List content (posts, projects, tags, featured)
    #[command(alias = "ls")]
    List {
        /// Type of content to list (posts, projects, tags, featured)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Only items carrying this tag ("All" lists everything)
        #[arg(short, long)]
        tag: Option<String>,

        /// Only items matching this search query
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a single post or project by slug
    Show {
        /// Type of content (posts, projects)
        r#type: String,

        /// Slug of the item, the filename minus its extension
        slug: String,
    },

    /// Create a new post or project file
    New {
        /// Type of content to create (post, project)
        #[arg(short, long, default_value = "post")]
        r#type: String,

        /// Title of the new item
        title: String,
    },

    /// Send a message through the contact relay
    Contact {
        /// Sender name
        #[arg(short, long)]
        name: String,

        /// Sender email address
        #[arg(short, long)]
        email: String,

        /// Message body
        #[arg(short, long)]
        message: String,
    },

    /// Display site information from _config.yml
    Info,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
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
        Commands::List {
            r#type,
            tag,
            query,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, tag.as_deref(), query.as_deref())?;
        }

        Commands::Show { r#type, slug } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::show::run(&folio, &r#type, &slug)?;
        }

        Commands::New { r#type, title } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", r#type, title);
            folio_rs::commands::new::run(&folio, &r#type, &title)?;
        }

        Commands::Contact {
            name,
            email,
            message,
        } => {
            folio_rs::commands::contact::run(&name, &email, &message).await?;
        }

        Commands::Info => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::info::run(&folio)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
