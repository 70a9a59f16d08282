// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wingdeck - a terminal client for the winget setup dashboard.
//!
//! Binary entry point: parses the command line, loads configuration, opens
//! the session store, and dispatches to the command implementations. Running
//! without a subcommand opens the interactive dashboard.

mod account;
mod apps;
mod dashboard;
mod render;
mod script;
mod status;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use wingdeck_client::ApiClient;
use wingdeck_config::WingdeckConfig;
use wingdeck_core::BackendApi;
use wingdeck_session::SessionStore;

/// Wingdeck - manage your winget setup list from the terminal.
#[derive(Parser, Debug)]
#[command(name = "wingdeck", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the usual hierarchy.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard.
    Dashboard,
    /// Sign in and store the session.
    Login {
        /// Account email; prompted for when omitted.
        #[arg(long)]
        email: Option<String>,
    },
    /// Create an account and sign in.
    Signup {
        /// Account email; prompted for when omitted.
        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the stored session.
    Logout,
    /// Print the application list.
    List,
    /// Add one application.
    Add {
        /// Display name for the entry.
        #[arg(long)]
        name: String,
        /// Winget package identifier.
        #[arg(long)]
        winget_id: Option<String>,
        /// Direct HTTPS download URL.
        #[arg(long)]
        download_url: Option<String>,
        /// Extra installer arguments.
        #[arg(long)]
        args: Option<String>,
    },
    /// Remove one application by id.
    Rm {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Generate the install script for the current list.
    Script {
        /// Write the script here; a directory gets the default filename.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Copy the script to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Print the script even when --out or --copy is given.
        #[arg(long)]
        print: bool,
    },
    /// Show configuration, session, and backend reachability.
    Status {
        /// Emit machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = load_config_or_exit(cli.config.as_deref());

    init_tracing(&config.ui.log_level);
    if !config.ui.color {
        colored::control::set_override(false);
    }

    let session = Arc::new(SessionStore::open(config.session.state_path.clone()).await);
    let api: Arc<dyn BackendApi> = match ApiClient::new(&config.server, Arc::clone(&session)) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => dashboard::run_dashboard(api, session).await,
        Commands::Login { email } => account::run_login(api.as_ref(), &session, email).await,
        Commands::Signup { email } => account::run_signup(api.as_ref(), &session, email).await,
        Commands::Logout => account::run_logout(&session).await,
        Commands::List => apps::run_list(api, &session).await,
        Commands::Add {
            name,
            winget_id,
            download_url,
            args,
        } => apps::run_add(api.as_ref(), &session, name, winget_id, download_url, args).await,
        Commands::Rm { id, yes } => apps::run_rm(api.as_ref(), &session, id, yes).await,
        Commands::Script { out, copy, print } => {
            script::run_script(api, &session, out, copy, print).await
        }
        Commands::Status { json } => {
            status::run_status(&config, api.as_ref(), &session, json).await
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

fn load_config_or_exit(path: Option<&std::path::Path>) -> WingdeckConfig {
    let loaded = match path {
        Some(path) => wingdeck_config::load_and_validate_path(path),
        None => wingdeck_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            wingdeck_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wingdeck={log_level},warn")));

    // Diagnostics go to stderr; stdout stays clean for script output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
