//! Web application server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ middleware ──▶ axum router ──▶ view
//!                                  (trace, id,    (route table   (default,
//!                                   timeout,       mounted at     home_page)
//!                                   limit,         startup)
//!                                   metrics)           │
//!                                                      └──▶ 404 fallback
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use web_app::lifecycle::{signals, startup, Shutdown};
use web_app::web::url_patterns;

#[derive(Parser)]
#[command(name = "web-app")]
#[command(about = "Serve the web application and inspect its routes", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// List the route table
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the path of a named route
    Reverse {
        /// Route name, e.g. "home-page"
        name: String,
    },
}

#[derive(Serialize)]
struct RouteEntry<'a> {
    path: &'a str,
    handler: &'static str,
    name: Option<&'a str>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = startup::init(cli.config.as_deref())?;
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "web-app starting");

            let shutdown = Shutdown::new();
            signals::spawn_signal_handler(shutdown.clone());
            startup::start(config, &shutdown).await?;

            tracing::info!("Shutdown complete");
        }
        Commands::Routes { json } => {
            let routes = url_patterns()?;
            let entries: Vec<_> = routes
                .iter()
                .map(|route| RouteEntry {
                    path: route.path(),
                    handler: route.handler().name(),
                    name: route.name(),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!(
                        "{:<10} {:<12} {}",
                        entry.path,
                        entry.handler,
                        entry.name.unwrap_or("-")
                    );
                }
            }
        }
        Commands::Reverse { name } => {
            let routes = url_patterns()?;
            println!("{}", routes.reverse(&name)?);
        }
    }

    Ok(())
}
