use std::future::Future;
use std::io;
use tracing::{error, info};

/// Resolves once `signal` fires, if listening for it fails this never resolves
/// so the server keeps running instead of shutting down right away.
pub async fn wait_for_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!("[WEB] failed to listen for the shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    info!("[WEB] shutdown signal received, draining connections");
}

/// resolves on ctrl-c
pub async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}
