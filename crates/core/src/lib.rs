//! EdgeFollow Core
//!
//! A pointer-driven interaction component for a host UI surface:
//! - **Entry edge:** Remembers which surface edge the pointer came in through
//! - **Resize:** Grows the element from a shrunk baseline toward its natural
//!   size as the pointer moves away from the entry edge
//! - **Follow:** Keeps the element centered on the pointer
//!
//! This crate is pure computation: no rendering, no layout, no windowing.
//! The host forwards pointer events and applies the returned [`VisualUpdate`].

pub mod geometry;
pub mod resizer;
pub mod update;

pub use geometry::{closest_edge, distance_to_edge, scale_dimension, scale_size};
pub use resizer::{EdgeFollowResizer, ResizerConfig, ResizerState};
pub use update::{RenderState, VisualUpdate};
