mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use logbook_core::env_config::{
    ENV_API_URL, ENV_DATABASE_URL, ENV_DATABASE_URL_FALLBACK, ENV_HOST, ENV_PAGE_SIZE, ENV_PORT,
    env_first_non_empty, env_parse_with_default,
};
use logbook_core::{DEFAULT_API_URL, DEFAULT_HOST, DEFAULT_ITEMS_PER_PAGE, DEFAULT_PORT};
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "logbook")]
#[command(about = "Log entry server and terminal client", long_about = None)]
struct Cli {
    /// Base URL of the logs API, e.g. http://127.0.0.1:4000/api
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// PostgreSQL connection string
        #[arg(long, conflicts_with = "in_memory")]
        database_url: Option<String>,
        /// Keep records in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
    /// Print one page of logs
    List {
        #[arg(short, long, default_value = "1")]
        page: usize,
        #[arg(long)]
        per_page: Option<NonZeroUsize>,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a single log
    Get {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Create a log
    Add {
        #[arg(short, long)]
        owner: String,
        #[arg(short, long)]
        text: String,
    },
    /// Change a log; omitted fields keep their current value
    Edit {
        id: i64,
        #[arg(short, long)]
        owner: Option<String>,
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Delete a log
    Delete { id: i64 },
    /// Page through logs interactively
    Browse {
        #[arg(long)]
        per_page: Option<NonZeroUsize>,
    },
}

pub(crate) fn resolve_api_url(flag: Option<String>) -> String {
    flag.or_else(|| env_first_non_empty(&[ENV_API_URL]))
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
}

pub(crate) fn resolve_page_size(flag: Option<NonZeroUsize>) -> NonZeroUsize {
    flag.unwrap_or_else(|| {
        let size = env_parse_with_default(ENV_PAGE_SIZE, DEFAULT_ITEMS_PER_PAGE);
        NonZeroUsize::new(size).unwrap_or_else(|| {
            tracing::warn!(var = ENV_PAGE_SIZE, "page size must be positive, using default");
            NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN)
        })
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if matches!(cli.command, Commands::Serve { .. }) { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .init();

    let api_url = resolve_api_url(cli.api_url);

    match cli.command {
        Commands::Serve { port, host, database_url, in_memory } => {
            let port = port.unwrap_or_else(|| env_parse_with_default(ENV_PORT, DEFAULT_PORT));
            let host = host
                .or_else(|| env_first_non_empty(&[ENV_HOST]))
                .unwrap_or_else(|| DEFAULT_HOST.to_owned());
            let database_url = if in_memory {
                None
            } else {
                database_url
                    .or_else(|| env_first_non_empty(&[ENV_DATABASE_URL, ENV_DATABASE_URL_FALLBACK]))
            };
            commands::serve::run(&host, port, database_url.as_deref()).await?;
        },
        Commands::List { page, per_page, json } => {
            commands::logs::run_list(&api_url, page, resolve_page_size(per_page), json).await?;
        },
        Commands::Get { id, json } => commands::logs::run_get(&api_url, id, json).await?,
        Commands::Add { owner, text } => commands::logs::run_add(&api_url, &owner, &text).await?,
        Commands::Edit { id, owner, text } => {
            commands::logs::run_edit(&api_url, id, owner, text).await?;
        },
        Commands::Delete { id } => commands::logs::run_delete(&api_url, id).await?,
        Commands::Browse { per_page } => {
            commands::browse::run(&api_url, resolve_page_size(per_page)).await?;
        },
    }

    Ok(())
}
