//! Progress/result presentation lifecycle.
//!
//! The presenter shows a progress view while a task runs, then swaps it
//! for a result view. The host decides what "show" means.

use edgefollow_common::error::{EdgeFollowError, EdgeFollowResult};

use crate::task::ProgressHandle;

/// Host-side widgets for a progress/result panel.
pub trait ProgressView {
    /// Make the progress indicator visible.
    fn show_progress(&mut self);

    fn set_progress(&mut self, percent: u8);

    /// Remove the progress indicator.
    fn hide_progress(&mut self);

    /// Display the final result text.
    fn show_result(&mut self, text: &str);

    /// Display a failure. Defaults to showing the error as the result text.
    fn show_failure(&mut self, error: &EdgeFollowError) {
        self.show_result(&error.to_string());
    }
}

/// Drives a [`ProgressView`] through one task's lifetime.
pub struct ProgressPresenter<V: ProgressView> {
    view: V,
    result_text: String,
}

impl<V: ProgressView> ProgressPresenter<V> {
    /// Reset progress to zero and show the progress view.
    pub fn new(mut view: V, result_text: impl Into<String>) -> Self {
        view.set_progress(0);
        view.show_progress();
        Self {
            view,
            result_text: result_text.into(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Forward progress until the task ends, then show the outcome.
    pub async fn drive<T>(&mut self, mut handle: ProgressHandle<T>) -> EdgeFollowResult<T> {
        while let Some(percent) = handle.changed().await {
            self.view.set_progress(percent);
        }

        let result = handle.join().await;
        self.view.hide_progress();

        match &result {
            Ok(_) => {
                tracing::info!(text = %self.result_text, "Background task completed");
                self.view.show_result(&self.result_text);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Background task did not complete");
                self.view.show_failure(e);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::ProgressTask;

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<String>,
    }

    impl ProgressView for RecordingView {
        fn show_progress(&mut self) {
            self.calls.push("show_progress".into());
        }

        fn set_progress(&mut self, percent: u8) {
            self.calls.push(format!("set_progress({percent})"));
        }

        fn hide_progress(&mut self) {
            self.calls.push("hide_progress".into());
        }

        fn show_result(&mut self, text: &str) {
            self.calls.push(format!("show_result({text})"));
        }
    }

    #[tokio::test]
    async fn test_successful_lifecycle() {
        let mut presenter = ProgressPresenter::new(RecordingView::default(), "Loaded!");
        let handle = ProgressTask::spawn(|reporter| {
            reporter.set(100);
            Ok(())
        });

        presenter.drive(handle).await.unwrap();

        let calls = &presenter.view().calls;
        assert_eq!(calls[0], "set_progress(0)");
        assert_eq!(calls[1], "show_progress");
        assert_eq!(calls[calls.len() - 3], "set_progress(100)");
        assert_eq!(calls[calls.len() - 2], "hide_progress");
        assert_eq!(calls[calls.len() - 1], "show_result(Loaded!)");
    }

    #[tokio::test]
    async fn test_failure_is_shown() {
        let mut presenter = ProgressPresenter::new(RecordingView::default(), "Loaded!");
        let handle: ProgressHandle<()> =
            ProgressTask::spawn(|_| Err(EdgeFollowError::task("no input")));

        assert!(presenter.drive(handle).await.is_err());

        let view = presenter.into_view();
        assert_eq!(
            view.calls.last().map(String::as_str),
            Some("show_result(Background task failed: no input)")
        );
        assert!(view.calls.contains(&"hide_progress".to_string()));
    }
}
