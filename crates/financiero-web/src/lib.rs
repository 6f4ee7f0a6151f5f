//! financiero-web - Web frontend for financiero using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::{App, AppRoot, Providers};
pub use bootstrap::{bootstrap, BootstrapConfig, BootstrapError, BrowserHost, MountHost};
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::router::create_router;

    /// Serve the built frontend from `dist_dir`
    pub async fn run(dist_dir: PathBuf, port: u16) -> Result<()> {
        if !dist_dir.join("index.html").exists() {
            tracing::warn!(
                dist = %dist_dir.display(),
                "index.html not found, run `trunk build --release` in crates/financiero-web"
            );
        }

        let router = create_router(dist_dir);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router)
            .await
            .context("Web server terminated unexpectedly")?;

        Ok(())
    }
}
