//! EdgeFollow Model
//!
//! Defines the data contracts shared between a host surface and the resizer:
//! - **Geometry:** Points, rectangles, element sizes, and the four surface edges
//! - **Trace:** Recorded pointer enter/move/exit streams in JSONL form
//!
//! All coordinates are integer pixels in the host surface's coordinate space.

pub mod geometry;
pub mod trace;

pub use geometry::*;
pub use trace::*;
