//! The edge-follow resizer.
//!
//! One resizer serves one host surface. The host forwards pointer enter,
//! move, and exit events synchronously and applies the returned
//! [`VisualUpdate`] to whatever element it owns (a painted image, a child
//! widget, ...).

use edgefollow_common::config::ResizerDefaults;
use edgefollow_common::error::{EdgeFollowError, EdgeFollowResult};
use edgefollow_model::geometry::{Edge, ElementSize, Point, Rect};
use edgefollow_model::trace::PointerEvent;
use serde::{Deserialize, Serialize};

use crate::geometry::{closest_edge, distance_to_edge, scale_size};
use crate::update::VisualUpdate;

/// Tuning constants for the scaling formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizerConfig {
    /// The element starts at `1 / initial_scale` of its natural size.
    pub initial_scale: u32,

    /// Growth per pixel of distance, as a fraction of the natural size.
    pub sensitivity: f64,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            initial_scale: 2,
            sensitivity: 0.001,
        }
    }
}

/// Unvalidated; callers may still override fields before
/// [`EdgeFollowResizer::with_config`] validates the result.
impl From<&ResizerDefaults> for ResizerConfig {
    fn from(defaults: &ResizerDefaults) -> Self {
        Self {
            initial_scale: defaults.initial_scale,
            sensitivity: defaults.sensitivity,
        }
    }
}

impl ResizerConfig {
    pub fn validate(&self) -> EdgeFollowResult<()> {
        if self.initial_scale == 0 {
            return Err(EdgeFollowError::config("initial_scale must be at least 1"));
        }
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(EdgeFollowError::config(format!(
                "sensitivity must be a positive finite number, got {}",
                self.sensitivity
            )));
        }
        Ok(())
    }
}

/// Mutable interaction state, owned by a single resizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizerState {
    /// Edge the pointer came in through; cleared on exit.
    pub entry_edge: Option<Edge>,
    pub visible: bool,
    /// Last computed size. Left stale after exit.
    pub current_size: Option<ElementSize>,
    /// Last computed top-left position. Left stale after exit.
    pub current_position: Option<Point>,
}

/// Resizes and repositions a host element as the pointer moves away from
/// the edge it entered through.
#[derive(Debug, Clone)]
pub struct EdgeFollowResizer {
    original_size: ElementSize,
    config: ResizerConfig,
    state: ResizerState,
}

impl EdgeFollowResizer {
    /// Create a resizer with the default tuning (`initial_scale = 2`,
    /// `sensitivity = 0.001`).
    pub fn new(original_size: ElementSize) -> Self {
        Self {
            original_size,
            config: ResizerConfig::default(),
            state: ResizerState::default(),
        }
    }

    /// Create a resizer with custom tuning.
    pub fn with_config(
        original_size: ElementSize,
        config: ResizerConfig,
    ) -> EdgeFollowResult<Self> {
        config.validate()?;
        Ok(Self {
            original_size,
            config,
            state: ResizerState::default(),
        })
    }

    pub fn original_size(&self) -> ElementSize {
        self.original_size
    }

    pub fn config(&self) -> &ResizerConfig {
        &self.config
    }

    pub fn state(&self) -> &ResizerState {
        &self.state
    }

    pub fn entry_edge(&self) -> Option<Edge> {
        self.state.entry_edge
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// Pointer entered the surface.
    pub fn on_enter(&mut self, pointer: Point, surface: &Rect) -> VisualUpdate {
        let edge = closest_edge(pointer, surface);
        let size = self.original_size.div_floor(self.config.initial_scale);

        self.state.entry_edge = Some(edge);
        self.state.visible = true;
        self.state.current_size = Some(size);

        tracing::debug!(
            edge = %edge,
            x = pointer.x,
            y = pointer.y,
            width = size.width,
            height = size.height,
            "Pointer entered surface"
        );

        VisualUpdate::shown(size)
    }

    /// Pointer moved inside the surface.
    ///
    /// # Panics
    ///
    /// Panics if no [`on_enter`](Self::on_enter) happened since construction
    /// or since the last [`on_exit`](Self::on_exit). That is a bug in the host
    /// integration; use [`try_on_move`](Self::try_on_move) to get an error instead.
    pub fn on_move(&mut self, pointer: Point, surface: &Rect) -> VisualUpdate {
        match self.try_on_move(pointer, surface) {
            Ok(update) => update,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`on_move`](Self::on_move), but reports a missing entry edge as
    /// [`EdgeFollowError::ProtocolViolation`]. State is untouched on error.
    pub fn try_on_move(
        &mut self,
        pointer: Point,
        surface: &Rect,
    ) -> EdgeFollowResult<VisualUpdate> {
        let edge = self.state.entry_edge.ok_or_else(|| {
            EdgeFollowError::protocol_violation(
                "pointer move received before pointer enter; no entry edge recorded",
            )
        })?;

        let distance = distance_to_edge(pointer, edge, surface);
        let size = scale_size(self.original_size, distance, &self.config);
        let position = pointer.centering(size);

        self.state.current_size = Some(size);
        self.state.current_position = Some(position);

        tracing::trace!(
            edge = %edge,
            distance,
            width = size.width,
            height = size.height,
            x = position.x,
            y = position.y,
            "Pointer moved"
        );

        Ok(VisualUpdate::placed(size, position))
    }

    /// Pointer left the surface.
    pub fn on_exit(&mut self) -> VisualUpdate {
        self.state.visible = false;
        self.state.entry_edge = None;

        tracing::debug!("Pointer exited surface");

        VisualUpdate::hidden()
    }

    /// Dispatch a recorded pointer event, reporting protocol violations as
    /// errors rather than panicking.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        surface: &Rect,
    ) -> EdgeFollowResult<VisualUpdate> {
        match event {
            PointerEvent::Enter { x, y } => Ok(self.on_enter(Point { x, y }, surface)),
            PointerEvent::Move { x, y } => self.try_on_move(Point { x, y }, surface),
            PointerEvent::Exit => Ok(self.on_exit()),
        }
    }
}
