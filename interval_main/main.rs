mod config;
mod log;

use eyre::{Result, WrapErr as _};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    crate::log::init_logging();

    let config = config::Config::load().await.wrap_err("Failed to load config")?;
    let router = interval_api::router(&config.api)?;

    let listener = TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.bind))?;
    tracing::info!("Server is running on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {err:?}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err:?}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down");
}
