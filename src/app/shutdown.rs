//! Signal handling for native hosts.

use crate::driver::StopToken;

/// Spawns a task that requests a stop on Ctrl+C. Needs a running tokio
/// runtime. In raw mode the terminal swallows Ctrl+C, so the terminal
/// host also maps the key itself.
pub fn spawn_signal_handler(stop: StopToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, stopping");
            stop.request_stop();
        }
    });
}
