//! HTTP surface: router, handlers, shared state, and the serve loop.

mod handlers;
mod router;
mod state;

pub use handlers::API_KEY_HEADER;
pub use router::create_router;
pub use state::AppState;

use std::sync::Arc;

use jafr_config::JafrConfig;
use jafr_oracle::ChatCompletionClient;

use crate::error::ServeError;

/// Bind `config.server.addr()` and serve until the process is stopped.
///
/// # Errors
///
/// Returns [`ServeError`] if the oracle client cannot be built or the
/// listener cannot bind.
pub async fn run(config: JafrConfig) -> Result<(), ServeError> {
    let addr = config.server.addr();
    let client = ChatCompletionClient::new(&config.oracle)?;
    tracing::info!(
        enabled = config.oracle.enabled,
        url = client.url(),
        model = %config.oracle.model,
        "oracle configured"
    );

    let state = AppState::with_oracle(config.oracle, Arc::new(client));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "jafr server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
