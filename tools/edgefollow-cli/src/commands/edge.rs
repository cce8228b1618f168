//! Report the closest surface edge to a point.

use edgefollow_core::{closest_edge, distance_to_edge};
use edgefollow_model::geometry::{Edge, Point, Rect};

pub fn run(surface: Rect, point: Point) -> anyhow::Result<()> {
    for line in report(surface, point) {
        println!("{line}");
    }
    Ok(())
}

/// Lines describing the closest edge and the distance to every edge.
pub fn report(surface: Rect, point: Point) -> Vec<String> {
    let edge = closest_edge(point, &surface);

    let mut lines = vec![format!("Closest edge: {edge}"), "Distances:".to_string()];
    for candidate in Edge::ALL {
        let marker = if candidate == edge { " *" } else { "" };
        lines.push(format!(
            "  {:<6} {}{marker}",
            candidate.as_str(),
            distance_to_edge(point, candidate, &surface)
        ));
    }
    if !surface.contains(point) {
        lines.push("Note: point lies outside the surface".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_reports_top() {
        let lines = report(Rect::new(0, 0, 500, 300), Point::new(0, 0));
        assert_eq!(
            lines,
            vec![
                "Closest edge: top",
                "Distances:",
                "  top    0 *",
                "  right  500",
                "  bottom 300",
                "  left   0",
            ]
        );
    }

    #[test]
    fn test_outside_point_is_noted() {
        let lines = report(Rect::new(0, 0, 500, 300), Point::new(-20, 150));
        assert_eq!(lines[0], "Closest edge: left");
        assert_eq!(lines[5], "  left   20 *");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Note: point lies outside the surface")
        );
    }
}
