//! EdgeFollow Progress
//!
//! Runs blocking work off the event thread and reports its progress:
//! - **Task:** [`ProgressTask`] spawns work with a [`ProgressReporter`] and
//!   returns a cancellable [`ProgressHandle`]
//! - **Presenter:** [`ProgressPresenter`] drives a host [`ProgressView`]
//!   through the progress and result phases
//! - **Workload:** a deterministic demo computation used by the CLI

pub mod presenter;
pub mod task;
pub mod workload;

pub use presenter::{ProgressPresenter, ProgressView};
pub use task::{ProgressHandle, ProgressReporter, ProgressTask};
