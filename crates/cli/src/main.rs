//! `expense-ledger` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — run pending database migrations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "expense-ledger",
    about = "Small expense-tracking service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
        /// Connection pool ceiling.
        #[arg(long, default_value_t = 10)]
        max_connections: u32,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            database_url,
            max_connections,
        } => {
            info!("Starting API server on {bind}");
            let pool = db::pool::create_pool(&database_url, max_connections)
                .await
                .context("failed to connect to database")?;
            api::serve(&bind, pool).await.context("server failed")?;
        }
        Command::Migrate { database_url } => {
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool)
                .await
                .context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
