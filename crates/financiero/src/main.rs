//! financiero - serve the web frontend and inspect its navigation

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "financiero",
    version,
    about = "Financiero - Gestión Integral",
    long_about = "Serves the compiled Leptos frontend and inspects its sidebar navigation.\n\
                  \n\
                  Examples:\n\
                    financiero                       # Serve on port 3333 (default)\n\
                    financiero serve --port 8080     # Custom port\n\
                    financiero routes                # List sidebar sections\n\
                    financiero routes --active /income\n\
                  \n\
                  Web Frontend Workflow:\n\
                    trunk build --release            # Compile frontend once (crates/financiero-web)\n\
                    financiero serve                 # Serves the static frontend\n\
                  \n\
                  Environment Variables:\n\
                    FINANCIERO_PORT                  # Port for the web server\n\
                    FINANCIERO_DIST                  # Directory with the Trunk build output\n\
                    FINANCIERO_NO_COLOR              # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: financiero=info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Port for web server
    #[arg(long, global = true, env = "FINANCIERO_PORT", default_value = "3333")]
    port: u16,

    /// Directory containing the Trunk build output
    #[arg(
        long,
        global = true,
        env = "FINANCIERO_DIST",
        default_value = "crates/financiero-web/dist"
    )]
    dist: PathBuf,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "FINANCIERO_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web frontend (default)
    Serve,
    /// Print the sidebar navigation sections and exit
    Routes {
        /// Mark the section active for this path
        #[arg(long)]
        active: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "financiero=info,financiero_web=info".into()),
        )
        .with_ansi(!cli.no_color)
        .init();

    match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => {
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                port = cli.port,
                dist = %cli.dist.display(),
                "Starting financiero"
            );
            financiero_web::run(cli.dist, cli.port).await?;
        }
        Mode::Routes { active, json } => {
            println!(
                "{}",
                cli::format_routes(active.as_deref(), json, cli.no_color)
            );
        }
    }

    Ok(())
}
