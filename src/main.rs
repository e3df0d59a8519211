use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use chrono::Utc;
use config::SiteConfig;
use eyre::WrapErr as _;
use tracing::info;

mod config;
mod export;
mod routes;
mod setup;
mod views;

#[derive(Clone, Debug)]
struct AppState {
    config: Arc<SiteConfig>,
}

impl AppState {
    fn from_env() -> eyre::Result<Self> {
        let config = SiteConfig::from_env()?;

        Ok(Self {
            config: Arc::new(config),
        })
    }
}

fn main() -> eyre::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()?
        .block_on(_main())
}

async fn _main() -> eyre::Result<()> {
    setup::setup_tracing(env!("CARGO_PKG_NAME"))?;

    let app_state = AppState::from_env().wrap_err("Failed to load site config")?;

    if let Ok(out_dir) = std::env::var("STATIC_EXPORT_DIR") {
        info!("Static export enabled");
        export::export_site(&app_state, &PathBuf::from(out_dir), Utc::now()).await?;
        return Ok(());
    }

    run_server(routes::routes(app_state)).await
}

async fn run_server(app: axum::Router) -> eyre::Result<()> {
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .wrap_err("PORT must be a valid port number")?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
