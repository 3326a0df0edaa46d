use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Route panic messages through tracing so they end up in the same sink
/// as everything else.
pub fn register_panic_logger() {
    std::panic::set_hook(Box::new(|panic| match panic.location() {
        Some(location) => {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        }
        None => tracing::error!(message = %panic),
    }));
}

/// Wait for SIGINT/SIGTERM once, then notify every server task through a
/// watch channel. Returns the waiter handle and a receiver to clone into
/// each task.
pub fn graceful_shutdown_blocker() -> (JoinHandle<()>, watch::Receiver<()>) {
    let (tx, rx) = watch::channel(());

    let handle = tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::error!("failed to install SIGTERM handler: {}", e);
                    let _ = tokio::signal::ctrl_c().await;
                    let _ = tx.send(());
                    return;
                }
            };
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
        }

        tracing::info!("shutdown signal received");
        let _ = tx.send(());
    });

    (handle, rx)
}
