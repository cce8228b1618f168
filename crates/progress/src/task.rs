//! Background task with progress reporting.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use edgefollow_common::error::{EdgeFollowError, EdgeFollowResult};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handed to the work closure to publish progress and observe cancellation.
#[derive(Debug)]
pub struct ProgressReporter {
    progress: watch::Sender<u8>,
    cancel_flag: Arc<AtomicBool>,
}

impl ProgressReporter {
    /// Publish progress as a percentage, clamped to `0..=100`.
    pub fn set(&self, percent: u32) {
        let percent = percent.min(100) as u8;
        self.progress.send_if_modified(|current| {
            if *current == percent {
                return false;
            }
            *current = percent;
            true
        });
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Return `Err(Cancelled)` once cancellation has been requested, so work
    /// loops can bail out with `?`.
    pub fn checkpoint(&self) -> EdgeFollowResult<()> {
        if self.is_cancelled() {
            Err(EdgeFollowError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Spawner for progress-reporting work.
pub struct ProgressTask;

impl ProgressTask {
    /// Run `work` on tokio's blocking pool.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, F>(work: F) -> ProgressHandle<T>
    where
        T: Send + 'static,
        F: FnOnce(&ProgressReporter) -> EdgeFollowResult<T> + Send + 'static,
    {
        let (tx, rx) = watch::channel(0u8);
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let reporter = ProgressReporter {
            progress: tx,
            cancel_flag: cancel_flag.clone(),
        };

        let join = tokio::task::spawn_blocking(move || {
            tracing::debug!("Background task started");
            let result = work(&reporter);
            tracing::debug!(ok = result.is_ok(), "Background task finished");
            result
        });

        ProgressHandle {
            progress: rx,
            cancel_flag,
            join,
        }
    }
}

/// Owner-side handle to a running [`ProgressTask`].
#[derive(Debug)]
pub struct ProgressHandle<T> {
    progress: watch::Receiver<u8>,
    cancel_flag: Arc<AtomicBool>,
    join: JoinHandle<EdgeFollowResult<T>>,
}

impl<T> ProgressHandle<T> {
    /// Latest published progress.
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// Request cooperative cancellation.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Get the cancel flag for external coordination (e.g. a Ctrl-C handler)
    /// after the handle itself has been handed off.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel_flag.clone()
    }

    /// Wait for the next progress value. Returns `None` once the task has
    /// finished and every published value has been observed.
    pub async fn changed(&mut self) -> Option<u8> {
        match self.progress.changed().await {
            Ok(()) => Some(*self.progress.borrow_and_update()),
            Err(_) => None,
        }
    }

    /// Wait for the task to finish.
    ///
    /// A task whose cancellation was requested always resolves to
    /// [`EdgeFollowError::Cancelled`], even if the work ran to completion.
    pub async fn join(self) -> EdgeFollowResult<T> {
        let result = self
            .join
            .await
            .map_err(|e| EdgeFollowError::task(format!("worker did not complete: {e}")))?;

        if self.cancel_flag.load(Ordering::SeqCst) {
            return Err(EdgeFollowError::Cancelled);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_progress_values_are_observed() {
        let mut handle = ProgressTask::spawn(|reporter| {
            for percent in [10, 50, 100] {
                reporter.set(percent);
            }
            Ok(42u32)
        });

        let mut last = 0;
        while let Some(p) = handle.changed().await {
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 100);
        assert_eq!(handle.progress(), 100);
        assert_eq!(handle.join().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_progress_is_clamped() {
        let mut handle = ProgressTask::spawn(|reporter| {
            reporter.set(250);
            Ok(())
        });
        while handle.changed().await.is_some() {}
        assert_eq!(handle.progress(), 100);
        handle.join().await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_stops_work() {
        let (started_tx, started_rx) = std::sync::mpsc::channel();
        let handle: ProgressHandle<()> = ProgressTask::spawn(move |reporter| {
            started_tx.send(()).ok();
            loop {
                reporter.checkpoint()?;
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
        });

        started_rx.recv().unwrap();
        handle.cancel();
        assert!(handle.is_cancelled());
        let err = handle.join().await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_work_error_propagates() {
        let handle: ProgressHandle<()> =
            ProgressTask::spawn(|_| Err(EdgeFollowError::task("input asset missing")));
        let err = handle.join().await.unwrap_err();
        assert!(err.to_string().contains("input asset missing"));
    }

    #[tokio::test]
    async fn test_panicking_work_becomes_task_error() {
        let handle: ProgressHandle<()> = ProgressTask::spawn(|_| panic!("worker exploded"));
        let err = handle.join().await.unwrap_err();
        assert!(matches!(err, EdgeFollowError::Task { .. }));
    }
}
