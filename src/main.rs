//! Admin Console binary.
//!
//! With the `server` feature this serves the SSR app plus `/api/login`;
//! the `web` build hydrates the same `App` in the browser.

use admin_console::app::App;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use admin_console::{auth, config};
    use axum::routing::post;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_console=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Admin Console v{} ({})",
        env!("ADMIN_VERSION"),
        env!("ADMIN_GIT_SHA")
    );

    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    if config.auth.uses_default_password() {
        tracing::warn!("Administrator password is the default; set auth.password_sha256");
    }

    let credentials = Arc::new(config.auth.credentials());

    let app = dioxus::server::router(App)
        .route(
            "/api/login",
            post(auth::login_handler).with_state(credentials),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.ip, config.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
