//! Edge detection and the scaling formula.
//!
//! Each displayed dimension follows
//!
//! ```text
//! current = min(original / initial_scale + trunc(distance * sensitivity * original), original)
//! ```
//!
//! where `distance` is the pointer's distance from the entry edge. Both axes
//! use the same scalar distance, so the aspect ratio drifts while growing.

use edgefollow_model::geometry::{Edge, ElementSize, Point, Rect};

use crate::resizer::ResizerConfig;

/// Distance from `pointer` to `edge` of `surface`, measured along the axis
/// perpendicular to that edge.
///
/// Pointers outside the surface are valid and simply produce larger values.
pub fn distance_to_edge(pointer: Point, edge: Edge, surface: &Rect) -> u64 {
    (pointer.coordinate_for(edge) - surface.edge_coordinate(edge)).unsigned_abs()
}

/// The surface edge nearest to `pointer`.
///
/// Ties resolve to the earliest edge in `Top, Right, Bottom, Left` order,
/// which also decides corner entries.
pub fn closest_edge(pointer: Point, surface: &Rect) -> Edge {
    let mut best = Edge::Top;
    let mut best_distance = distance_to_edge(pointer, best, surface);

    for edge in &Edge::ALL[1..] {
        let distance = distance_to_edge(pointer, *edge, surface);
        if distance < best_distance {
            best = *edge;
            best_distance = distance;
        }
    }

    best
}

/// Apply the scaling formula to one dimension.
pub fn scale_dimension(original: u32, distance: u64, config: &ResizerConfig) -> u32 {
    let baseline = u64::from(original / config.initial_scale);
    // Float-to-int `as` saturates, so huge distances clamp instead of wrapping.
    let growth = (distance as f64 * config.sensitivity * f64::from(original)) as u64;

    baseline.saturating_add(growth).min(u64::from(original)) as u32
}

/// Apply the scaling formula to both dimensions with the same distance.
pub fn scale_size(original: ElementSize, distance: u64, config: &ResizerConfig) -> ElementSize {
    ElementSize {
        width: scale_dimension(original.width, distance, config),
        height: scale_dimension(original.height, distance, config),
    }
}
