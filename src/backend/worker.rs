//! Backend worker thread
//!
//! Runs the [`Backend`] on a dedicated thread with a single-threaded tokio
//! runtime. One loop multiplexes three sources: the shutdown token,
//! gateway requests, and the clipboard poll interval. Requests are handled
//! one at a time in arrival order.
//!
//! A panic inside the worker is caught and logged so it cannot write over
//! the terminal UI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::service::Backend;
use crate::gateway::{Request, Response};

pub fn spawn_worker(
    backend: Backend,
    poll_interval: Duration,
    request_rx: UnboundedReceiver<Request>,
    response_tx: Sender<Response>,
    shutdown: CancellationToken,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("clipdeck-backend".to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("failed to create backend runtime: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(
                    backend,
                    poll_interval,
                    request_rx,
                    response_tx,
                    shutdown,
                ));
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("backend worker panicked: {}", panic_msg);
            }
        })
}

/// Processes requests and clipboard ticks until shutdown or until every
/// gateway is gone.
async fn worker_loop(
    mut backend: Backend,
    poll_interval: Duration,
    mut request_rx: UnboundedReceiver<Request>,
    response_tx: Sender<Response>,
    shutdown: CancellationToken,
) {
    backend.start();

    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::debug!("backend worker started, polling every {:?}", poll_interval);

    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                log::debug!("backend worker shutting down");
                break;
            }

            request = request_rx.recv() => {
                let Some(request) = request else {
                    log::debug!("all gateways dropped, backend worker exiting");
                    break;
                };
                let response = backend.handle(request);
                if response_tx.send(response).is_err() {
                    log::debug!("response receiver gone");
                }
            }

            _ = ticker.tick() => {
                backend.poll_clipboard();
            }
        }
    }

    backend.persist_history();
}
