//! Values handed back to the host after each pointer event.

use edgefollow_model::geometry::{ElementSize, Point};
use serde::Serialize;

/// What the host should change on its drawable after one event.
///
/// Absent fields mean "leave as is".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisualUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ElementSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

impl VisualUpdate {
    pub fn shown(size: ElementSize) -> Self {
        Self {
            visible: Some(true),
            size: Some(size),
            position: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }

    pub fn placed(size: ElementSize, position: Point) -> Self {
        Self {
            visible: None,
            size: Some(size),
            position: Some(position),
        }
    }

    /// Fold this update into a host-side render state.
    pub fn apply_to(&self, state: &mut RenderState) {
        if let Some(visible) = self.visible {
            state.visible = visible;
        }
        if let Some(size) = self.size {
            state.size = Some(size);
        }
        if let Some(position) = self.position {
            state.position = Some(position);
        }
    }
}

/// Accumulated visual state for hosts that repaint from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    pub visible: bool,
    pub size: Option<ElementSize>,
    pub position: Option<Point>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where and how large to draw the element, if it should be drawn.
    ///
    /// Nothing is drawn until the first move has supplied a position.
    pub fn drawable(&self) -> Option<(Point, ElementSize)> {
        if !self.visible {
            return None;
        }
        Some((self.position?, self.size?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut state = RenderState::new();
        VisualUpdate::shown(ElementSize::new(10, 5)).apply_to(&mut state);
        assert!(state.visible);
        assert_eq!(state.position, None);
        assert_eq!(state.drawable(), None);

        VisualUpdate::placed(ElementSize::new(12, 6), Point::new(3, 4)).apply_to(&mut state);
        assert_eq!(
            state.drawable(),
            Some((Point::new(3, 4), ElementSize::new(12, 6)))
        );

        VisualUpdate::hidden().apply_to(&mut state);
        assert_eq!(state.drawable(), None);
        assert_eq!(state.size, Some(ElementSize::new(12, 6)));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&VisualUpdate::hidden()).unwrap();
        assert_eq!(json, r#"{"visible":false}"#);

        let json = serde_json::to_string(&VisualUpdate::shown(ElementSize::new(2, 1))).unwrap();
        assert_eq!(json, r#"{"visible":true,"size":{"width":2,"height":1}}"#);
    }
}
