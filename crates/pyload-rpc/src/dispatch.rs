//! Completion delivery for callback-style calls.
//!
//! By default a callback runs on the runtime worker that finished the
//! request. A front-end that keeps its state on one thread creates a
//! [`CallbackLoop`], builds its client with the loop's [`Delivery`], and
//! drains completions from that thread.

use std::fmt;
use tokio::sync::mpsc;

/// A finished call waiting for its callback to run.
pub(crate) type Completion = Box<dyn FnOnce() + Send>;

/// Where completed callbacks run.
#[derive(Clone, Default)]
pub enum Delivery {
    /// On the task that completed the request.
    #[default]
    Inline,
    /// Queued to a [`CallbackLoop`].
    Queued(mpsc::UnboundedSender<Completion>),
}

impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("Inline"),
            Self::Queued(_) => f.write_str("Queued"),
        }
    }
}

impl Delivery {
    /// Run `completion` exactly once.
    ///
    /// A completion whose loop is gone runs inline instead of being lost.
    pub(crate) fn deliver(&self, completion: Completion) {
        match self {
            Self::Inline => completion(),
            Self::Queued(tx) => {
                if let Err(mpsc::error::SendError(completion)) = tx.send(completion) {
                    tracing::debug!("Callback loop dropped, running completion inline");
                    completion();
                }
            }
        }
    }
}

/// Receives completions and runs them on the caller's thread.
pub struct CallbackLoop {
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl Default for CallbackLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackLoop {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Delivery handle for clients feeding this loop.
    pub fn delivery(&self) -> Delivery {
        Delivery::Queued(self.tx.clone())
    }

    /// Run every completion that is already queued. Never blocks.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(completion) = self.rx.try_recv() {
            completion();
            ran += 1;
        }
        ran
    }

    /// Wait for the next completion and run it.
    ///
    /// The loop holds its own sender, so this waits until some call
    /// completes.
    pub async fn run_next(&mut self) {
        if let Some(completion) = self.rx.recv().await {
            completion();
        }
    }
}

impl Drop for CallbackLoop {
    /// Completions still queued run here, so none is lost with the loop.
    fn drop(&mut self) {
        self.rx.close();
        let ran = self.run_pending();
        if ran > 0 {
            tracing::debug!(ran, "Ran queued completions while dropping callback loop");
        }
    }
}
