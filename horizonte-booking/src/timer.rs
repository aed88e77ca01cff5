use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::sleep;

/// How long the success dialog stays up before closing itself
pub const SUCCESS_AUTO_DISMISS: Duration = Duration::from_secs(3);

/// How the dismiss timer resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    Elapsed,
    Cancelled,
}

/// One-shot auto-dismiss timer with a cancellation handle.
///
/// Closing the success dialog manually must cancel the pending timer so no
/// dangling callback fires against an already-dismissed dialog. A cancel
/// issued before `wait` starts still wins.
pub struct DismissTimer {
    delay: Duration,
    cancel: Arc<Notify>,
}

/// Cloneable handle that cancels the timer it came from
#[derive(Clone)]
pub struct DismissHandle {
    cancel: Arc<Notify>,
}

impl DismissTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: Arc::new(Notify::new()),
        }
    }

    pub fn handle(&self) -> DismissHandle {
        DismissHandle {
            cancel: Arc::clone(&self.cancel),
        }
    }

    pub async fn wait(self) -> DismissOutcome {
        tokio::select! {
            _ = sleep(self.delay) => DismissOutcome::Elapsed,
            _ = self.cancel.notified() => DismissOutcome::Cancelled,
        }
    }
}

impl DismissHandle {
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }
}
