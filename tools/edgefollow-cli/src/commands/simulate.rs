//! Replay a pointer trace through an edge-follow resizer.

use std::path::{Path, PathBuf};

use edgefollow_common::config::AppConfig;
use edgefollow_common::error::{EdgeFollowError, EdgeFollowResult};
use edgefollow_core::{EdgeFollowResizer, RenderState, ResizerConfig, VisualUpdate};
use edgefollow_model::geometry::{ElementSize, Rect};
use edgefollow_model::trace::{parse_trace, Trace};
use serde::Serialize;

/// Command-line values that take precedence over the trace header and the
/// configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub surface: Option<Rect>,
    pub element: Option<ElementSize>,
    pub initial_scale: Option<u32>,
    pub sensitivity: Option<f64>,
}

#[derive(Serialize)]
struct RenderLine {
    event: usize,
    visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
}

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    overrides: Overrides,
    render: bool,
) -> anyhow::Result<()> {
    let trace = load_trace(&path)?;
    tracing::info!(events = trace.events.len(), path = %path.display(), "Loaded trace");

    let updates = replay(config, &trace, overrides)?;

    let mut state = RenderState::new();
    for (index, update) in updates.iter().enumerate() {
        let line = if render {
            update.apply_to(&mut state);
            let drawable = state.drawable();
            serde_json::to_string(&RenderLine {
                event: index + 1,
                visible: drawable.is_some(),
                x: drawable.map(|(p, _)| p.x),
                y: drawable.map(|(p, _)| p.y),
                width: drawable.map(|(_, s)| s.width),
                height: drawable.map(|(_, s)| s.height),
            })?
        } else {
            serde_json::to_string(update)?
        };
        println!("{line}");
    }

    Ok(())
}

/// Read and parse a trace file.
///
/// Only a missing file is reported as `FileNotFound`; other read failures
/// surface as I/O errors and malformed content as a trace error.
pub fn load_trace(path: &Path) -> EdgeFollowResult<Trace> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => EdgeFollowError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => EdgeFollowError::Io(e),
    })?;

    parse_trace(&content).map_err(|e| {
        EdgeFollowError::trace(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Feed every event of `trace` to a fresh resizer.
///
/// A move without a preceding enter is reported as an error naming the
/// offending event instead of panicking.
pub fn replay(
    config: &AppConfig,
    trace: &Trace,
    overrides: Overrides,
) -> anyhow::Result<Vec<VisualUpdate>> {
    let surface = overrides
        .surface
        .or(trace.header.map(|h| h.surface))
        .ok_or_else(|| anyhow::anyhow!("No surface bounds: pass --surface or add a trace header"))?;
    let element = overrides
        .element
        .or(trace.header.map(|h| h.element))
        .ok_or_else(|| anyhow::anyhow!("No element size: pass --element or add a trace header"))?;

    let mut resizer_config = ResizerConfig::from(&config.resizer);
    if let Some(initial_scale) = overrides.initial_scale {
        resizer_config.initial_scale = initial_scale;
    }
    if let Some(sensitivity) = overrides.sensitivity {
        resizer_config.sensitivity = sensitivity;
    }

    // Validated only after overrides, so the command line can correct a bad
    // config file.
    let mut resizer = EdgeFollowResizer::with_config(element, resizer_config)?;

    trace
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            resizer
                .handle(*event, &surface)
                .map_err(|e| anyhow::anyhow!("Event {}: {e}", index + 1))
        })
        .collect()
}
