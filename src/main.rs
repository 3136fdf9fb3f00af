//! Route resolution CLI.
//!
//! Inspect the application's route table and render plans from a shell:
//! resolve a path against a chosen session/alert state and print the
//! composed plan, or dump the table in declaration order.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use folio_router::actions::ActionKind;
use folio_router::config::{load_config, AppConfig};
use folio_router::observability::logging;
use folio_router::state::{Alert, AppState, Session, UserIdentity};
use folio_router::view::lazy::StaticViewSource;
use folio_router::{reading_app_table, resolve_and_compose, ViewLoader};

#[derive(Parser)]
#[command(name = "folio-router")]
#[command(about = "Route table and render-plan inspector", long_about = None)]
struct Cli {
    /// Path to an AppConfig TOML file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path and print the composed render plan as JSON
    Resolve {
        /// Path to resolve, e.g. /tag/rust
        path: String,

        /// Resolve as a signed-in user, given as "id:username"
        #[arg(long)]
        user: Option<String>,

        /// Resolve with a pending alert message
        #[arg(long)]
        alert: Option<String>,
    },
    /// Print the route table in declaration order
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    logging::init(&config.observability.log_filter);

    let table = reading_app_table();

    match cli.command {
        Commands::Routes => {
            for route in table.iter() {
                println!("{:<28} {}", route.pattern.as_str(), route.view);
            }
        }
        Commands::Resolve { path, user, alert } => {
            let mut state = AppState::default();
            if let Some(spec) = user {
                let (id, username) = spec
                    .split_once(':')
                    .ok_or("--user expects \"id:username\"")?;
                state.current_user = Session::SignedIn(UserIdentity {
                    id: id.to_string(),
                    username: username.to_string(),
                });
            }
            if let Some(message) = alert {
                state.alerts.set(Alert::error(message));
            }

            let plan = resolve_and_compose(&table, &path, &state, &config);
            println!("{}", serde_json::to_string_pretty(&plan)?);

            let actions: Vec<ActionKind> = plan.required_actions().to_vec();
            if !actions.is_empty() {
                println!("actions: {}", serde_json::to_string(&actions)?);
            }

            // Warm the deferred modules the plan needs, like a shell would.
            let loader = ViewLoader::new(Arc::new(StaticViewSource));
            for id in plan.lazy_modules() {
                let module = loader.load(id).await?;
                println!("loaded module: {}", module.chunk);
            }
        }
    }

    Ok(())
}
