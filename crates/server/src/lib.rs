pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::net::SocketAddr;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use router::create_router;
pub use state::AppState;

/// Bind the listener and serve the relay until the process is killed.
pub async fn run_server(
    addr: SocketAddr,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Relay listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
