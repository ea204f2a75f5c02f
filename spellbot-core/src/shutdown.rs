//! Cooperative shutdown signal shared by the poll loop and handler tasks.

use tokio::sync::watch;

/// Cloneable cancellation signal backed by a watch channel.
///
/// The owner calls [`shutdown`]; every clone observes it through
/// [`cancelled`] or [`is_shutdown`].
///
/// [`shutdown`]: ShutdownToken::shutdown
/// [`cancelled`]: ShutdownToken::cancelled
/// [`is_shutdown`]: ShutdownToken::is_shutdown
#[derive(Debug, Clone)]
pub struct ShutdownToken {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    /// Signals shutdown to every clone of this token. Idempotent.
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }

    /// True once [`shutdown`](ShutdownToken::shutdown) has been called.
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown is signalled. Cancel-safe; may be polled from
    /// any number of tasks at once.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            // A closed channel means every sender is gone; treat as shutdown.
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}
