// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ReviewSync - Google review widget toolchain.
//!
//! Binary entry point: loads configuration, opens the SQLite store, and
//! dispatches to the widget and business subcommands.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use reviewsync_config::ReviewSyncConfig;
use reviewsync_core::ReviewSyncError;
use reviewsync_embed::EmbedOptions;
use reviewsync_storage::SqliteStore;
use reviewsync_widgets::WidgetService;

mod businesses;
mod widgets;

/// ReviewSync - Google review widget toolchain.
#[derive(Parser, Debug)]
#[command(name = "reviewsync", version, about, long_about = None)]
struct Cli {
    /// Path to a config file (bypasses the XDG hierarchy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List widgets, newest first.
    List {
        /// Restrict to one business.
        #[arg(long)]
        business: Option<i64>,
    },
    /// Show one widget with its settings decompressed.
    Show { id: i64 },
    /// Create a widget for a business.
    Create {
        /// Owning business id.
        #[arg(long)]
        business: i64,
        /// Widget theme (card, list, minimal, grid, carousel).
        #[arg(long)]
        theme: Option<String>,
        /// Partial settings as a JSON object; omitted fields use defaults.
        #[arg(long)]
        settings: Option<String>,
    },
    /// Update a widget; only the given fields change.
    Update {
        id: i64,
        #[arg(long)]
        business: Option<i64>,
        #[arg(long)]
        theme: Option<String>,
        /// Replacement settings as a JSON object.
        #[arg(long)]
        settings: Option<String>,
    },
    /// Delete a widget.
    Delete { id: i64 },
    /// Render a widget layout against its synced reviews.
    Preview { id: i64 },
    /// Print the embed snippet for a widget.
    Embed { id: i64 },
    /// Inspect and seed synced businesses.
    Business {
        #[command(subcommand)]
        command: businesses::BusinessCommands,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reviewsync={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<ReviewSyncConfig, ExitCode> {
    let result = match path {
        Some(path) => reviewsync_config::load_and_validate_path(path),
        None => reviewsync_config::load_and_validate(),
    };
    result.map_err(|errors| {
        reviewsync_config::render_errors(&errors);
        ExitCode::FAILURE
    })
}

async fn run(command: Commands, config: &ReviewSyncConfig) -> Result<(), ReviewSyncError> {
    let store = Arc::new(SqliteStore::open(&config.storage.database_path).await?);
    let service = WidgetService::new(
        store.clone(),
        store.clone(),
        EmbedOptions {
            script_url: config.embed.script_url.clone(),
        },
    );

    match command {
        Commands::List { business } => widgets::run_list(&service, business).await,
        Commands::Show { id } => widgets::run_show(&service, id).await,
        Commands::Create {
            business,
            theme,
            settings,
        } => widgets::run_create(&service, business, theme.as_deref(), settings.as_deref()).await,
        Commands::Update {
            id,
            business,
            theme,
            settings,
        } => {
            widgets::run_update(&service, id, business, theme.as_deref(), settings.as_deref())
                .await
        }
        Commands::Delete { id } => widgets::run_delete(&service, id).await,
        Commands::Preview { id } => widgets::run_preview(&service, store.as_ref(), id).await,
        Commands::Embed { id } => widgets::run_embed(&service, id).await,
        Commands::Business { command } => businesses::run(command, store.as_ref()).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };
    init_tracing(&config.app.log_level);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("reviewsync: {e}");
            ExitCode::FAILURE
        }
    }
}
