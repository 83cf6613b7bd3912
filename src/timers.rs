use tokio::sync::oneshot;
use tokio::time::Duration;

/// Cancellation token for a scheduled callback. Dropping the handle leaves
/// the timer running; only an explicit `cancel` stops it.
#[derive(Debug)]
pub struct TimerHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl TimerHandle {
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

/// Runs `callback` once after `delay` unless the returned handle is
/// canceled first. Must be called from within a tokio runtime.
pub fn schedule<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => callback(),
            Ok(()) = cancel_rx => {}
        }
    });
    TimerHandle {
        cancel: Some(cancel_tx),
    }
}
