//! Pointer trace format.
//!
//! A trace is JSONL: an optional header line describing the surface and the
//! element's natural size, followed by one pointer event per line. Blank
//! lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"surface":{"x":0,"y":0,"width":500,"height":300},"element":{"width":200,"height":100}}
//! {"type":"enter","x":0,"y":150}
//! {"type":"move","x":100,"y":150}
//! {"type":"exit"}
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{ElementSize, Point, Rect};

/// Surface and element dimensions for a recorded trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceHeader {
    pub surface: Rect,
    pub element: ElementSize,
}

/// A pointer event delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer crossed into the surface.
    Enter { x: i32, y: i32 },
    /// Pointer moved while inside the surface.
    Move { x: i32, y: i32 },
    /// Pointer left the surface.
    Exit,
}

impl PointerEvent {
    /// Pointer position if this event carries one.
    pub fn point(&self) -> Option<Point> {
        match *self {
            PointerEvent::Enter { x, y } | PointerEvent::Move { x, y } => Some(Point { x, y }),
            PointerEvent::Exit => None,
        }
    }
}

/// A parsed trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub header: Option<TraceHeader>,
    pub events: Vec<PointerEvent>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TraceLine {
    Header(TraceHeader),
    Event(PointerEvent),
}

/// Parse a trace from JSONL content.
///
/// The header, if present, must be the first data line.
pub fn parse_trace(jsonl: &str) -> Result<Trace, serde_json::Error> {
    use serde::de::Error;

    let mut trace = Trace::default();
    let lines = jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    for (index, line) in lines.enumerate() {
        match serde_json::from_str::<TraceLine>(line)? {
            TraceLine::Header(header) if index == 0 => trace.header = Some(header),
            TraceLine::Header(_) => {
                return Err(serde_json::Error::custom(format!(
                    "trace header must be the first line, found at data line {}",
                    index + 1
                )));
            }
            TraceLine::Event(event) => trace.events.push(event),
        }
    }

    Ok(trace)
}

/// Serialize a trace back to JSONL.
pub fn write_trace(trace: &Trace) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    if let Some(header) = &trace.header {
        out.push_str(&serde_json::to_string(header)?);
        out.push('\n');
    }
    for event in &trace.events {
        out.push_str(&serde_json::to_string(event)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# pointer pulled in from the left edge
{"surface":{"x":0,"y":0,"width":500,"height":300},"element":{"width":200,"height":100}}
{"type":"enter","x":0,"y":150}

{"type":"move","x":100,"y":150}
{"type":"exit"}
"#;

    #[test]
    fn test_parse_sample() {
        let trace = parse_trace(SAMPLE).unwrap();
        let header = trace.header.unwrap();
        assert_eq!(header.surface, Rect::new(0, 0, 500, 300));
        assert_eq!(header.element, ElementSize::new(200, 100));
        assert_eq!(
            trace.events,
            vec![
                PointerEvent::Enter { x: 0, y: 150 },
                PointerEvent::Move { x: 100, y: 150 },
                PointerEvent::Exit,
            ]
        );
    }

    #[test]
    fn test_headerless_trace() {
        let trace = parse_trace(r#"{"type":"exit"}"#).unwrap();
        assert!(trace.header.is_none());
        assert_eq!(trace.events, vec![PointerEvent::Exit]);
    }

    #[test]
    fn test_late_header_rejected() {
        let input = concat!(
            "{\"type\":\"exit\"}\n",
            "{\"surface\":{\"x\":0,\"y\":0,\"width\":1,\"height\":1},\"element\":{\"width\":1,\"height\":1}}\n",
        );
        let err = parse_trace(input).unwrap_err();
        assert!(err.to_string().contains("first line"));
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        assert!(parse_trace(r#"{"type":"click","x":1,"y":2}"#).is_err());
    }

    #[test]
    fn test_write_then_parse() {
        let trace = parse_trace(SAMPLE).unwrap();
        let written = write_trace(&trace).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert_eq!(parse_trace(&written).unwrap(), trace);
    }

    #[test]
    fn test_event_point() {
        assert_eq!(
            PointerEvent::Move { x: 3, y: 4 }.point(),
            Some(Point::new(3, 4))
        );
        assert_eq!(PointerEvent::Exit.point(), None);
    }
}
