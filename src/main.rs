use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use carlot::{build_inventory, import_inventory};
use carlot_core::config::Config;
use carlot_core::PriceRange;
use carlot_sources::auth::{LoginOutcome, StoreAuth};
use carlot_sources::session::SessionStore;
use carlot_sources::{CarApi, HttpDocumentStore};

#[derive(Parser)]
#[command(name = "carlot", about = "Car dealership inventory tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble the inventory from the car-data API and print a summary.
    Fetch {
        /// Case-insensitive search term over make, model, and year.
        #[arg(long, default_value = "")]
        search: String,
        /// Price range tag: 0-10000, 10000-25000, 25000-50000, or 50000+.
        #[arg(long)]
        price_range: Option<String>,
        /// Write the stock report as JSON to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Assemble the inventory and bulk-import it into the document store.
    Import {
        /// Override the pause between writes, in milliseconds.
        #[arg(long)]
        pace_ms: Option<u64>,
    },
    /// Sign in with an email or username and cache the session.
    Login {
        identifier: String,
        password: String,
    },
    /// Clear the cached session.
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::load()?;

    match cli.command {
        Command::Fetch {
            search,
            price_range,
            report,
        } => {
            let range = price_range
                .as_deref()
                .map(str::parse::<PriceRange>)
                .transpose()?;
            let api = CarApi::new(&cfg.api);
            let inventory = build_inventory(&api, &cfg).await?;

            let matches = inventory.filter_cars(&search, range);
            println!(
                "{} cars assembled, {} matching",
                inventory.len(),
                matches.len()
            );
            for car in matches {
                println!("  {} (${})", car.description, car.price);
            }

            if let Some(path) = report {
                let rows = inventory.generate_report();
                std::fs::write(&path, serde_json::to_string_pretty(&rows)?)?;
                println!("report written to {}", path.display());
            }
        }
        Command::Import { pace_ms } => {
            let api = CarApi::new(&cfg.api);
            let inventory = build_inventory(&api, &cfg).await?;

            let store = HttpDocumentStore::new(cfg.store.base_url.clone());
            let pace = Duration::from_millis(pace_ms.unwrap_or(cfg.import.pace_ms));
            let summary = import_inventory(&store, &inventory, pace).await;

            println!(
                "imported {} of {} cars ({} failed)",
                summary.succeeded, summary.total, summary.failed
            );
            for failure in &summary.failures {
                println!("  {:?} {:?}: {}", failure.car_id, failure.name, failure.message);
            }
        }
        Command::Login {
            identifier,
            password,
        } => {
            let store = HttpDocumentStore::new(cfg.store.base_url.clone());
            let sessions = SessionStore::new(SessionStore::default_path());
            let auth = StoreAuth::new(&store, &sessions);
            match auth.login(&identifier, &password).await {
                LoginOutcome::Success(profile) => {
                    println!("signed in as {} ({})", profile.username, profile.role);
                }
                LoginOutcome::Failure(message) => anyhow::bail!("login failed: {message}"),
            }
        }
        Command::Logout => {
            let sessions = SessionStore::new(SessionStore::default_path());
            sessions.clear()?;
            println!("signed out");
        }
    }

    Ok(())
}
