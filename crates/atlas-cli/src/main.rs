use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "atlas")]
#[command(about = "Atlas CLI - describe a book, get a list of matching books", long_about = None)]
struct Cli {
    /// Backend base URL (overrides ATLAS_API_URL and config.toml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session storage file (defaults to <config_dir>/atlas/local_storage.toml)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Log in and persist the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show who is logged in
    Status,
    /// Show the system metrics panel
    Metrics,
    /// Search books by free-text description (login required)
    Search {
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Check backend health
    Health,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app = App::build(cli.api_url.as_deref(), cli.storage)?;
    app.restore_session().await;

    match cli.command {
        Commands::Register {
            username,
            password,
            confirm,
        } => commands::auth::register(&app, username, password, confirm).await?,
        Commands::Login { username, password } => {
            commands::auth::login(&app, username, password).await?
        }
        Commands::Logout => commands::auth::logout(&app).await?,
        Commands::Status => commands::auth::status(&app).await,
        Commands::Metrics => commands::browse::metrics(&app).await?,
        Commands::Search { description } => {
            commands::browse::search(&app, description.join(" ")).await?
        }
        Commands::Health => commands::browse::health(&app).await?,
    }

    Ok(())
}
