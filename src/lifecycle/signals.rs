//! OS signal handling.

use tokio::sync::broadcast;

/// Resolve on Ctrl+C or when the coordinator fires, whichever comes first.
///
/// A closed coordinator counts as a shutdown request.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                // Without a signal handler only the coordinator can stop us.
                let _ = shutdown.recv().await;
            }
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown requested");
        }
    }
}
