//! Run the background preprocessing demo with a terminal progress bar.

use std::io::Write;
use std::sync::atomic::Ordering;
use std::time::Duration;

use edgefollow_common::config::AppConfig;
use edgefollow_progress::workload::{doubling_mod, DoublingWorkload};
use edgefollow_progress::{ProgressPresenter, ProgressTask, ProgressView};

const BAR_WIDTH: usize = 40;

/// Progress bar on stderr, result on stdout.
struct TerminalView;

impl ProgressView for TerminalView {
    fn show_progress(&mut self) {
        eprintln!("Preprocessing... (Ctrl-C to cancel)");
    }

    fn set_progress(&mut self, percent: u8) {
        eprint!("\r{}", progress_bar(percent));
        std::io::stderr().flush().ok();
    }

    fn hide_progress(&mut self) {
        eprintln!();
    }

    fn show_result(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Render a fixed-width bar such as `[####----] 50%`.
fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = BAR_WIDTH * usize::from(percent) / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Workload from the configuration, with command-line values taking precedence.
fn build_workload(
    config: &AppConfig,
    iterations: Option<u64>,
    pause_ms: Option<u64>,
) -> DoublingWorkload {
    DoublingWorkload::new(iterations.unwrap_or(config.progress.iterations)).with_pause(
        Duration::from_millis(pause_ms.unwrap_or(config.progress.pause_ms)),
    )
}

pub async fn run(
    config: &AppConfig,
    iterations: Option<u64>,
    pause_ms: Option<u64>,
) -> anyhow::Result<()> {
    let workload = build_workload(config, iterations, pause_ms);

    let mut presenter = ProgressPresenter::new(TerminalView, config.progress.result_text.clone());
    let handle = ProgressTask::spawn(move |reporter| doubling_mod(workload, reporter));

    let cancel_flag = handle.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Cancellation requested");
            cancel_flag.store(true, Ordering::SeqCst);
        }
    });

    let value = presenter.drive(handle).await?;
    tracing::debug!(value, iterations = workload.iterations, "Preprocessing result");

    Ok(())
}
