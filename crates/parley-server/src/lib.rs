#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod health;
mod index;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use parley_config::Config;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Constructs the chat and transcription services (creating the upload
    /// spool directory) and wires them into the router. Both services are
    /// injected as axum state so tests can point them at a mock upstream
    /// via `groq.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if a service cannot be initialized, e.g. the
    /// credential is missing or the spool directory cannot be created
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], parley_config::server::DEFAULT_PORT)));

        let chat_service = parley_chat::build_service(config)?;
        let stt_service = parley_stt::build_service(config)?;

        let mut app = Router::new().route("/", get(index::index_handler));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        app = app.merge(parley_chat::endpoint_router().with_state(chat_service));
        app = app.merge(parley_stt::endpoint_router().with_state(stt_service));

        // Tracing, then CORS outermost; the browser front end may be served
        // from a different origin during development
        app = app.layer(TraceLayer::new_for_http());
        app = app.layer(CorsLayer::permissive());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
